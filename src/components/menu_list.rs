//! Menu List Component
//!
//! Sidebar menu: composes the canonical tree with the signed-in user and
//! the loaded config, then renders each group.

use leptos::prelude::*;
use dnc_core::{compose, MenuNode, NodeType};

use crate::components::NavGroup;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Empty until both the user and a validated config are present
    let groups = Memo::new(move |_| {
        let customization = store.customization().read();
        match (&customization.my_user, &customization.my_config) {
            (Some(user), Some(config)) => ctx.menu.with_value(|tree| compose(tree, user, config)),
            _ => Vec::<MenuNode>::new(),
        }
    });

    // Re-rendered whole whenever the composed menu changes, so a new alias
    // or plugin switch under an unchanged group id is picked up
    let rendered = move || {
        groups
            .get()
            .into_iter()
            .filter(|group| group.kind == NodeType::Group)
            .map(|group| view! { <NavGroup group=group /> })
            .collect_view()
    };

    view! {
        <nav class="menu-list">
            {rendered}
        </nav>
    }
}
