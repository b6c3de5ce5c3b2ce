//! Login Form Component
//!
//! Username/password form shown while signed out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{use_toasts, ToastKind};
use crate::context::use_app_context;
use crate::session;
use crate::store::use_app_store;

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let toasts = use_toasts();

    let (uname, set_uname) = signal(String::new());
    let (pwd, set_pwd) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);

        let uname = uname.get();
        let pwd = pwd.get();
        let settings = ctx.settings.get_value();
        spawn_local(async move {
            match commands::login_user(&settings, &uname, &pwd).await {
                Ok(session) => {
                    set_pwd.set(String::new());
                    toasts.push(ToastKind::Info, format!("Welcome, {}", session.user.display_name()));
                    session::sign_in(store, ctx, session);
                }
                Err(e) => toasts.push(ToastKind::Error, e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"DNC Admin"</h1>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || uname.get()
                    on:input=move |ev| set_uname.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || pwd.get()
                    on:input=move |ev| set_pwd.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
