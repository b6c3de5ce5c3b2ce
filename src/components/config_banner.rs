//! Config Banner Component
//!
//! Surfaces the config-load status: a notice while loading and the reason
//! plus a retry button when the config is missing or incomplete.

use leptos::prelude::*;
use dnc_core::LoadStatus;

use crate::context::use_app_context;
use crate::session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ConfigBanner() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let status = move || store.config_load().read().status().clone();

    let retry = move |_| {
        let token = store.customization().read_untracked().my_token.clone();
        if let Some(token) = token {
            session::load_config(store, ctx, token);
        }
    };

    view! {
        {move || match status() {
            LoadStatus::Loading => view! {
                <div class="config-banner loading">"Loading configuration..."</div>
            }.into_any(),
            LoadStatus::Failed(reason) => view! {
                <div class="config-banner error">
                    <span>"Configuration incomplete: " {reason}</span>
                    <button on:click=retry>"Retry"</button>
                </div>
            }.into_any(),
            LoadStatus::Idle | LoadStatus::Ready => ().into_any(),
        }}
    }
}
