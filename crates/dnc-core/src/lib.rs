//! DNC Admin Core
//!
//! Framework-free logic behind the admin shell:
//! - domain: config, user, menu and route types
//! - store: customization reducer and config-load bookkeeping
//! - menu: static menu definition and the role/flag-driven composer
//! - routes: the one-time route table build
//! - auth / session: login response handling and session persistence

pub mod domain;
pub mod store;
pub mod menu;
pub mod routes;
pub mod auth;
pub mod session;

pub use domain::{Config, ConfigError, Level, MenuNode, NodeType, RouteChild, RouteEntry, User, ViewKind};
pub use store::{reduce, Action, ConfigLoad, Customization, LoadStatus, ThemeMode};
pub use menu::{compose, default_menu, find_by_url};
pub use routes::{register_routes, plugin_divergence, DivergenceKind, PluginDivergence, RouteTable, ENABLED_PLUGINS};
pub use auth::{interpret_login_response, LoginError, LoginRequest, Session};
pub use session::{clear_session, restore_session, save_session, MemorySessionStore, SessionError, SessionStore};
