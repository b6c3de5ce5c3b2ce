//! Static Menu Definition
//!
//! The canonical sidebar tree. Composition works on borrowed copies of it.

use crate::domain::MenuNode;

fn dashboard() -> MenuNode {
    MenuNode::group(
        "dashboard",
        "Dashboard",
        vec![MenuNode::item("default", "Dashboard", "/dashboard/default", "dashboard")],
    )
}

fn pages() -> MenuNode {
    MenuNode::group(
        "pages",
        "Pages",
        vec![MenuNode::collapse(
            "administration",
            "Administration",
            "admin",
            vec![
                MenuNode::item("users", "Users", "/org/users", "users"),
                MenuNode::item("spots", "Spots", "/org/spots", "map-pin"),
                MenuNode::item("device", "Devices", "/config/devices", "device"),
                MenuNode::item("Gateway", "Gateways", "/config/gateways", "antenna"),
                MenuNode::item("stock", "Stock", "/config/stock", "box"),
            ],
        )],
    )
}

fn configuration() -> MenuNode {
    MenuNode::group(
        "configuration",
        "Configuration",
        vec![MenuNode::collapse(
            "settings",
            "Settings",
            "settings",
            vec![
                MenuNode::item("features", "Features", "/config/features", "toggle"),
                MenuNode::item("aliases", "Aliases", "/config/aliases", "tag"),
            ],
        )],
    )
}

fn utilities() -> MenuNode {
    MenuNode::group(
        "utilities",
        "Organization",
        vec![MenuNode::item("org-home", "Home", "/org/home", "home")],
    )
}

fn other() -> MenuNode {
    MenuNode::group(
        "other",
        "Plugins",
        vec![
            MenuNode::item("Subscription", "Subscriptions", "/plugins/subscriptions", "bell"),
            MenuNode::item("Download", "Data Download", "/plugins/download", "download"),
            MenuNode::item("Downlink", "Downlink", "/plugins/downlink", "send"),
            MenuNode::item("Brixtap", "Brixtap", "/plugins/brixtap", "plug"),
        ],
    )
}

fn training() -> MenuNode {
    MenuNode::group(
        "training",
        "Training",
        vec![MenuNode::item("training-home", "Training", "/training", "school")],
    )
}

/// The full sidebar tree, in display order
pub fn default_menu() -> Vec<MenuNode> {
    vec![dashboard(), pages(), configuration(), utilities(), other(), training()]
}
