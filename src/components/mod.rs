//! UI Components
//!
//! Leptos components of the admin shell.

mod login_form;
mod header;
mod menu_list;
mod nav_group;
mod route_outlet;
mod config_banner;
mod toast;

pub use login_form::LoginForm;
pub use header::Header;
pub use menu_list::MenuList;
pub use nav_group::NavGroup;
pub use route_outlet::RouteOutlet;
pub use config_banner::ConfigBanner;
pub use toast::{use_toasts, ToastKind, ToastStack, Toasts};
