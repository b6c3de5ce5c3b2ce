//! Menu Composer
//!
//! Derives the sidebar shown to a user from the static tree, the user's
//! level and the server config. The input tree is only borrowed; every call
//! returns a freshly built tree.

mod items;


pub use items::default_menu;

use crate::domain::{Config, Level, MenuNode, User};

/// Groups hidden from restricted levels
pub const RESTRICTED_GROUP_IDS: [&str; 3] = ["dashboard", "pages", "configuration"];
/// Group whose first child is the Administration section
pub const PAGES_GROUP_ID: &str = "pages";
/// Group listing plugin entry points
pub const PLUGINS_GROUP_ID: &str = "other";
/// Feature flag and menu item id of the gateway page
pub const GATEWAY_ID: &str = "Gateway";

/// Level gating only applies to trees with the full group layout.
const MIN_GATED_GROUPS: usize = 4;

/// Compose the sidebar for `user` under `config`
pub fn compose(tree: &[MenuNode], user: &User, config: &Config) -> Vec<MenuNode> {
    let mut groups = gate_by_level(tree, &user.level);

    if let Some(pages) = groups.iter_mut().find(|g| g.id == PAGES_GROUP_ID) {
        shape_administration(pages, config);
    }
    if let Some(plugins) = groups.iter_mut().find(|g| g.id == PLUGINS_GROUP_ID) {
        filter_plugins(plugins, config);
    }

    log::debug!(
        "composed menu for level {}: [{}]",
        user.level.as_str(),
        groups.iter().map(|g| g.id.as_str()).collect::<Vec<_>>().join(", ")
    );
    groups
}

fn gate_by_level(tree: &[MenuNode], level: &Level) -> Vec<MenuNode> {
    if level.has_full_menu() || tree.len() < MIN_GATED_GROUPS {
        return tree.to_vec();
    }
    tree.iter()
        .filter(|group| !RESTRICTED_GROUP_IDS.contains(&group.id.as_str()))
        .cloned()
        .collect()
}

/// Gateway flag and aliases on the Administration section
fn shape_administration(pages: &mut MenuNode, config: &Config) {
    let Some(admin) = pages.children.first_mut() else {
        return;
    };

    if config.feature(GATEWAY_ID) == Some(false) {
        admin.children.retain(|child| child.id != GATEWAY_ID);
    }

    apply_alias(admin, config);
    for child in admin.children.iter_mut() {
        apply_alias(child, config);
    }
}

fn apply_alias(node: &mut MenuNode, config: &Config) {
    if let Some(alias) = config.alias_for(&node.id) {
        node.title = alias.to_string();
    }
}

fn filter_plugins(plugins: &mut MenuNode, config: &Config) {
    plugins.children.retain(|child| config.plugin_enabled(&child.id));
}

/// Depth-first search for the item linking to `url`
pub fn find_by_url<'a>(tree: &'a [MenuNode], url: &str) -> Option<&'a MenuNode> {
    let wanted = url.trim_end_matches('/');
    tree.iter().find_map(|node| {
        if node.url.as_deref().map(|u| u.trim_end_matches('/')) == Some(wanted) {
            Some(node)
        } else {
            find_by_url(&node.children, url)
        }
    })
}
