//! Header Component
//!
//! Top bar with drawer toggle, theme switch and the signed-in user.

use leptos::prelude::*;
use dnc_core::Action;

use crate::session;
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let opened = move || store.customization().read().opened;
    let mode = move || store.customization().read().mode;
    let user_name = move || {
        store
            .customization()
            .read()
            .my_user
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    let toggle_drawer = move |_| dispatch(&store, Action::SetMenu { opened: !opened() });
    let toggle_theme = move |_| dispatch(&store, Action::SetThemeMode { mode: mode().toggled() });
    let sign_out = move |_| session::sign_out(store);

    view! {
        <header class="app-header">
            <button class="drawer-toggle" title="Toggle menu" on:click=toggle_drawer>
                "☰"
            </button>
            <span class="app-title">"DNC Admin"</span>
            <span class="header-spacer"></span>
            <button class="theme-toggle" title="Toggle theme" on:click=toggle_theme>
                {move || if mode() == dnc_core::ThemeMode::Dark { "☀" } else { "☾" }}
            </button>
            <span class="user-name">{user_name}</span>
            <button class="sign-out" on:click=sign_out>"Sign out"</button>
        </header>
    }
}
