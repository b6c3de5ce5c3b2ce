//! DNC Admin App
//!
//! Root component: provides the store and context, restores the session
//! and switches between the login page and the shell.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use dnc_core::{default_menu, find_by_url, register_routes, Action, ENABLED_PLUGINS};

use crate::components::{ConfigBanner, Header, LoginForm, MenuList, RouteOutlet, ToastStack, Toasts};
use crate::context::{location_path, AppContext};
use crate::session;
use crate::settings::ClientSettings;
use crate::store::{dispatch, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let settings = ClientSettings::from_build_env();
    log::info!("DNC backend at {}", settings.dnc_url);

    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(Toasts::new());

    let current_path = signal(location_path());
    let ctx = AppContext::new(
        settings,
        register_routes(&ENABLED_PLUGINS),
        default_menu(),
        current_path,
    );
    provide_context(ctx);

    // Back/forward and typed URLs
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_from_location());

    session::restore(store, ctx);

    // Highlight the menu entry matching the current path
    Effect::new(move |_| {
        let path = ctx.current_path.get();
        let matched = ctx.menu.with_value(|tree| find_by_url(tree, &path).map(|n| n.id.clone()));
        if let Some(id) = matched {
            dispatch(&store, Action::MenuOpen { id });
        }
    });

    let signed_in = move || store.customization().read().is_signed_in();
    let drawer_open = move || store.customization().read().opened;
    let shell_class = move || {
        format!("app-layout theme-{}", store.customization().read().mode.as_str())
    };
    let shell_style = move || {
        let customization = store.customization().read();
        format!(
            "font-family: {}; --border-radius: {}px;",
            customization.font_family, customization.border_radius
        )
    };

    view! {
        <div class=shell_class style=shell_style>
            <Show when=signed_in fallback=|| view! { <LoginForm /> }>
                <Header />
                <div class="shell-body">
                    <Show when=drawer_open>
                        <aside class="sidebar">
                            <MenuList />
                        </aside>
                    </Show>
                    <main class="main-content">
                        <ConfigBanner />
                        <RouteOutlet />
                    </main>
                </div>
            </Show>
            <ToastStack />
        </div>
    }
}
