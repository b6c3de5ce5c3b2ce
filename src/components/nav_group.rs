//! Navigation Group Components
//!
//! Renders one composed menu group: collapsible sections and links.
//! Nodes of unknown type render nothing.

use leptos::prelude::*;
use dnc_core::{Action, MenuNode, NodeType};

use crate::context::use_app_context;
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

/// Child of a group or collapse, by node type
fn nav_child(node: MenuNode, depth: usize) -> AnyView {
    match node.kind {
        NodeType::Collapse => view! { <NavCollapse node=node depth=depth /> }.into_any(),
        NodeType::Item => view! { <NavItem node=node depth=depth /> }.into_any(),
        NodeType::Group | NodeType::Unknown => ().into_any(),
    }
}

/// Titled top-level group
#[component]
pub fn NavGroup(group: MenuNode) -> impl IntoView {
    let title = group.title.clone();
    let children = group
        .children
        .into_iter()
        .filter(MenuNode::is_renderable)
        .map(|child| nav_child(child, 1))
        .collect_view();

    view! {
        <div class="nav-group">
            <div class="nav-group-title">{title}</div>
            {children}
        </div>
    }
}

/// Expandable section
///
/// Starts open when one of its items is the open menu entry.
#[component]
pub fn NavCollapse(node: MenuNode, depth: usize) -> impl IntoView {
    let store = use_app_store();

    let child_ids: Vec<String> = node.children.iter().map(|c| c.id.clone()).collect();
    let contains_open = store
        .customization()
        .read_untracked()
        .is_open
        .iter()
        .any(|id| child_ids.contains(id));
    let (open, set_open) = signal(contains_open);

    let indent = depth * 16;
    let title = node.title.clone();
    let children = node
        .children
        .into_iter()
        .filter(MenuNode::is_renderable)
        .map(|child| nav_child(child, depth + 1))
        .collect_view();

    view! {
        <div class="nav-collapse">
            <button
                class="nav-collapse-header"
                style=format!("padding-left: {}px;", indent)
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="nav-icon">{node.icon.unwrap_or_default()}</span>
                <span class="nav-title">{title}</span>
                <span class="nav-caret">{move || if open.get() { "▾" } else { "▸" }}</span>
            </button>
            <div class="nav-collapse-body" class:hidden=move || !open.get()>
                {children}
            </div>
        </div>
    }
}

/// Link to a route, or to an external page when `target` is set
#[component]
pub fn NavItem(node: MenuNode, depth: usize) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = node.id.clone();
    let is_active = {
        let id = id.clone();
        move || store.customization().read().is_open.contains(&id)
    };
    let url = node.url.clone().unwrap_or_default();
    let new_tab = node.target;
    let indent = depth * 16;

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        dispatch(&store, Action::MenuOpen { id: id.clone() });
        if new_tab {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::warn!("could not open {}: {:?}", url, e);
                }
            }
        } else {
            ctx.navigate(&url);
        }
    };

    view! {
        <a
            class=move || if is_active() { "nav-item active" } else { "nav-item" }
            href=format!("#{}", node.url.clone().unwrap_or_default())
            style=format!("padding-left: {}px;", indent)
            on:click=on_click
        >
            <span class="nav-icon">{node.icon.clone().unwrap_or_default()}</span>
            <span class="nav-title">{node.title.clone()}</span>
        </a>
    }
}
