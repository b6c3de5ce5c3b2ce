//! Application Context
//!
//! Shared, read-mostly values provided via Leptos Context API. Components
//! receive settings, the route table and the canonical menu from here
//! instead of reaching for globals.

use leptos::prelude::*;
use dnc_core::{MenuNode, RouteTable};

use crate::settings::ClientSettings;

/// Landing page when the location carries no route
pub const DEFAULT_PATH: &str = "/dashboard/default";

#[derive(Clone, Copy)]
pub struct AppContext {
    pub settings: StoredValue<ClientSettings>,
    /// Built once at start-up
    pub routes: StoredValue<RouteTable>,
    /// Canonical menu definition, never modified
    pub menu: StoredValue<Vec<MenuNode>>,
    /// Current route path - read
    pub current_path: ReadSignal<String>,
    /// Current route path - write
    set_current_path: WriteSignal<String>,
}

impl AppContext {
    pub fn new(
        settings: ClientSettings,
        routes: RouteTable,
        menu: Vec<MenuNode>,
        current_path: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            settings: StoredValue::new(settings),
            routes: StoredValue::new(routes),
            menu: StoredValue::new(menu),
            current_path: current_path.0,
            set_current_path: current_path.1,
        }
    }

    /// Move to `path`, keeping the location hash in sync
    pub fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(path) {
                log::warn!("could not update location for {}: {:?}", path, e);
            }
        }
        self.set_current_path.set(path.to_string());
    }

    /// Re-read the path from the location hash
    pub fn sync_from_location(&self) {
        self.set_current_path.set(location_path());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Route path carried by the location hash, `#/org/users` -> `/org/users`
pub fn location_path() -> String {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    path_from_hash(&hash)
}

fn path_from_hash(hash: &str) -> String {
    let path = hash.trim_start_matches('#');
    match path.trim_matches('/') {
        "" => DEFAULT_PATH.to_string(),
        trimmed => format!("/{}", trimmed),
    }
}
