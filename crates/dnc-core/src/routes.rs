//! Route Registrar
//!
//! Builds the navigable path table once at start-up: the core routes are
//! always present, plugin subtrees are appended for each key of a fixed
//! allow-list. The allow-list is independent of `Config::plugins`, so menu
//! visibility and route reachability can disagree; `plugin_divergence`
//! reports where they do.

use crate::domain::{Config, RouteChild, RouteEntry, ViewKind};

/// Plugins whose routes are registered
pub const ENABLED_PLUGINS: [&str; 4] = ["subscrip", "dnload", "dnlink", "brixtap"];

/// Plugin route key -> menu item id in the plugins group
pub const PLUGIN_MENU_IDS: [(&str, &str); 4] = [
    ("subscrip", "Subscription"),
    ("dnload", "Download"),
    ("dnlink", "Downlink"),
    ("brixtap", "Brixtap"),
];

fn core_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("dashboard", vec![RouteChild::new("default", ViewKind::DashboardDefault)]),
        RouteEntry::new(
            "org",
            vec![
                RouteChild::new("home", ViewKind::OrgHome),
                RouteChild::new("users", ViewKind::OrgUsers),
                RouteChild::new("spots", ViewKind::OrgSpots),
            ],
        ),
        RouteEntry::new(
            "config",
            vec![
                RouteChild::new("devices", ViewKind::ConfigDevices),
                RouteChild::new("gateways", ViewKind::ConfigGateways),
                RouteChild::new("stock", ViewKind::ConfigStock),
                RouteChild::new("features", ViewKind::ConfigFeatures),
                RouteChild::new("aliases", ViewKind::ConfigAliases),
            ],
        ),
        RouteEntry::new("training", vec![RouteChild::new("", ViewKind::Training)]),
    ]
}

/// Route subtree for a plugin key
pub fn plugin_routes(key: &str) -> Option<RouteEntry> {
    let child = match key {
        "subscrip" => RouteChild::new("subscriptions", ViewKind::Subscriptions),
        "dnload" => RouteChild::new("download", ViewKind::Download),
        "dnlink" => RouteChild::new("downlink", ViewKind::Downlink),
        "brixtap" => RouteChild::new("brixtap", ViewKind::Brixtap),
        _ => return None,
    };
    Some(RouteEntry::new("plugins", vec![child]))
}

/// Immutable path table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    plugin_keys: Vec<&'static str>,
}

/// Assemble the table from the core routes and `enabled_plugins`, in order.
/// Keys without a route subtree are skipped.
pub fn register_routes(enabled_plugins: &[&'static str]) -> RouteTable {
    let mut entries = core_routes();
    let mut plugin_keys = Vec::new();

    for key in enabled_plugins {
        match plugin_routes(key) {
            Some(entry) => {
                entries.push(entry);
                plugin_keys.push(*key);
            }
            None => log::warn!("no routes for plugin '{}', skipping", key),
        }
    }

    log::info!(
        "registered {} route groups ({} plugins)",
        entries.len(),
        plugin_keys.len()
    );
    RouteTable { entries, plugin_keys }
}

impl RouteTable {
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Every registered path, without leading slash
    pub fn paths(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| entry.full_paths().map(|(path, _)| path))
            .collect()
    }

    pub fn has_plugin(&self, key: &str) -> bool {
        self.plugin_keys.iter().any(|k| *k == key)
    }

    /// View for a location path. Leading and trailing slashes are ignored.
    pub fn resolve(&self, path: &str) -> Option<ViewKind> {
        let wanted = path.trim_matches('/');
        self.entries
            .iter()
            .flat_map(|entry| entry.full_paths())
            .find(|(full, _)| full == wanted)
            .map(|(_, view)| view)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivergenceKind {
    /// Menu entry hidden by config, route still reachable by URL
    HiddenButRoutable,
    /// Menu entry shown by config, no route registered
    VisibleButUnroutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDivergence {
    pub plugin_key: &'static str,
    pub menu_id: &'static str,
    pub kind: DivergenceKind,
}

/// Plugins whose menu visibility and route registration disagree
pub fn plugin_divergence(config: &Config, table: &RouteTable) -> Vec<PluginDivergence> {
    PLUGIN_MENU_IDS
        .iter()
        .filter_map(|&(plugin_key, menu_id)| {
            let visible = config.plugin_enabled(menu_id);
            let routable = table.has_plugin(plugin_key);
            let kind = match (visible, routable) {
                (false, true) => DivergenceKind::HiddenButRoutable,
                (true, false) => DivergenceKind::VisibleButUnroutable,
                _ => return None,
            };
            Some(PluginDivergence { plugin_key, menu_id, kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_plugins(plugins: &[(&str, bool)]) -> Config {
        Config {
            plugins: plugins.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn test_core_routes_always_present() {
        let none: &[&'static str] = &[];
        for enabled in [&ENABLED_PLUGINS[..], none] {
            let table = register_routes(enabled);
            let paths = table.paths();
            for path in ["dashboard/default", "org/home", "org/users", "org/spots", "config/devices", "training"] {
                assert!(paths.iter().any(|p| p == path), "missing {}", path);
            }
        }
    }

    #[test]
    fn test_plugin_routes_follow_allow_list() {
        let table = register_routes(&ENABLED_PLUGINS);
        for path in ["plugins/subscriptions", "plugins/download", "plugins/downlink", "plugins/brixtap"] {
            assert!(table.paths().iter().any(|p| p == path), "missing {}", path);
        }

        let table = register_routes(&["dnlink"]);
        assert_eq!(table.resolve("/plugins/downlink"), Some(ViewKind::Downlink));
        assert_eq!(table.resolve("/plugins/subscriptions"), None);
        assert!(table.has_plugin("dnlink"));
        assert!(!table.has_plugin("subscrip"));
    }

    #[test]
    fn test_unknown_plugin_key_skipped() {
        let table = register_routes(&["dnlink", "telemetry"]);
        assert_eq!(table.entries().len(), register_routes(&[]).entries().len() + 1);
        assert!(!table.has_plugin("telemetry"));
    }

    #[test]
    fn test_registration_order() {
        let table = register_routes(&["brixtap", "subscrip"]);
        let paths = table.paths();
        let brixtap = paths.iter().position(|p| p == "plugins/brixtap").unwrap();
        let subscrip = paths.iter().position(|p| p == "plugins/subscriptions").unwrap();
        assert!(brixtap < subscrip);
        assert_eq!(paths[0], "dashboard/default");
    }

    #[test]
    fn test_resolve_normalizes_slashes() {
        let table = register_routes(&ENABLED_PLUGINS);
        assert_eq!(table.resolve("/dashboard/default/"), Some(ViewKind::DashboardDefault));
        assert_eq!(table.resolve("training"), Some(ViewKind::Training));
        assert_eq!(table.resolve("/"), None);
        assert_eq!(table.resolve("/org"), None);
    }

    #[test]
    fn test_divergence_reported() {
        let table = register_routes(&["subscrip", "dnload", "brixtap"]);
        let config = config_plugins(&[("Subscription", false), ("Downlink", true), ("Download", true)]);

        let found = plugin_divergence(&config, &table);
        assert_eq!(
            found,
            vec![
                PluginDivergence {
                    plugin_key: "subscrip",
                    menu_id: "Subscription",
                    kind: DivergenceKind::HiddenButRoutable,
                },
                PluginDivergence {
                    plugin_key: "dnlink",
                    menu_id: "Downlink",
                    kind: DivergenceKind::VisibleButUnroutable,
                },
                PluginDivergence {
                    plugin_key: "brixtap",
                    menu_id: "Brixtap",
                    kind: DivergenceKind::HiddenButRoutable,
                },
            ]
        );
    }

    #[test]
    fn test_registrar_ignores_config() {
        use crate::domain::User;
        use crate::menu::{compose, default_menu, PLUGINS_GROUP_ID};

        let table = register_routes(&ENABLED_PLUGINS);
        let config = config_plugins(&[("Subscription", false), ("Downlink", true)]);

        // Menu follows the config
        let menu = compose(&default_menu(), &User::new("admin", "4"), &config);
        let plugins = menu
            .iter()
            .find(|g| g.id == PLUGINS_GROUP_ID)
            .expect("plugins group present");
        assert_eq!(plugins.child_ids(), vec!["Downlink"]);

        // Routes follow the allow-list only
        assert_eq!(table.paths(), register_routes(&ENABLED_PLUGINS).paths());
        assert_eq!(table.resolve("/plugins/subscriptions"), Some(ViewKind::Subscriptions));
        assert!(table.has_plugin("subscrip"));

        let hidden: Vec<&str> = plugin_divergence(&config, &table)
            .into_iter()
            .filter(|d| d.kind == DivergenceKind::HiddenButRoutable)
            .map(|d| d.menu_id)
            .collect();
        assert!(hidden.contains(&"Subscription"));
        assert!(!hidden.contains(&"Downlink"));
    }
}
