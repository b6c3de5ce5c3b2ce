//! Route Entities
//!
//! Path table shapes produced by the route registrar.

/// Page rendered for a registered path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    DashboardDefault,
    OrgHome,
    OrgUsers,
    OrgSpots,
    ConfigDevices,
    ConfigGateways,
    ConfigStock,
    ConfigFeatures,
    ConfigAliases,
    Training,
    Subscriptions,
    Download,
    Downlink,
    Brixtap,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::DashboardDefault => "Dashboard",
            ViewKind::OrgHome => "Organization",
            ViewKind::OrgUsers => "Users",
            ViewKind::OrgSpots => "Spots",
            ViewKind::ConfigDevices => "Devices",
            ViewKind::ConfigGateways => "Gateways",
            ViewKind::ConfigStock => "Stock",
            ViewKind::ConfigFeatures => "Features",
            ViewKind::ConfigAliases => "Aliases",
            ViewKind::Training => "Training",
            ViewKind::Subscriptions => "Subscriptions",
            ViewKind::Download => "Data Download",
            ViewKind::Downlink => "Downlink",
            ViewKind::Brixtap => "Brixtap",
        }
    }
}

/// Leaf of a route subtree. An empty `path` maps the parent path itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChild {
    pub path: &'static str,
    pub view: ViewKind,
}

impl RouteChild {
    pub fn new(path: &'static str, view: ViewKind) -> Self {
        Self { path, view }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub children: Vec<RouteChild>,
}

impl RouteEntry {
    pub fn new(path: &'static str, children: Vec<RouteChild>) -> Self {
        Self { path, children }
    }

    /// Full `parent/child` paths, without leading slash
    pub fn full_paths(&self) -> impl Iterator<Item = (String, ViewKind)> + '_ {
        self.children.iter().map(move |child| {
            let full = if child.path.is_empty() {
                self.path.to_string()
            } else {
                format!("{}/{}", self.path, child.path)
            };
            (full, child.view)
        })
    }
}
