//! Route Outlet Component
//!
//! Renders the page registered for the current path.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let ctx = use_app_context();

    let resolved = move || {
        let path = ctx.current_path.get();
        let view = ctx.routes.with_value(|routes| routes.resolve(&path));
        (path, view)
    };

    view! {
        <section class="route-outlet">
            {move || match resolved() {
                (_, Some(view)) => view! {
                    <div class="page">
                        <h2>{view.title()}</h2>
                        <p class="page-placeholder">"Nothing to show yet."</p>
                    </div>
                }.into_any(),
                (path, None) => view! {
                    <div class="page not-found">
                        <h2>"Page not found"</h2>
                        <p>{format!("No page is registered at {}", path)}</p>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
