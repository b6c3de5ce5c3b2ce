//! Domain Layer
//!
//! Data shapes exchanged with the backend and consumed by the shell.
//! No framework dependencies (serde only).

mod config;
mod user;
mod menu_node;
mod route;

pub use config::{Config, ConfigError, REQUIRED_KEYS};
pub use user::{Level, User};
pub use menu_node::{MenuNode, NodeType};
pub use route::{RouteChild, RouteEntry, ViewKind};
