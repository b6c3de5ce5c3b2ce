//! Backend Command Wrappers
//!
//! REST bindings to the DNC server, organized by domain.

mod auth;
mod config;

// Re-export all public items
pub use auth::*;
pub use config::*;

fn client() -> reqwest::Client {
    reqwest::Client::new()
}
