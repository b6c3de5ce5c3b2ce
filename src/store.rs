//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! customization record is only ever replaced through the `dnc_core`
//! reducer.

use leptos::prelude::*;
use reactive_stores::Store;
use dnc_core::{reduce, Action, ConfigLoad, Customization};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Config, user, token and shell preferences
    pub customization: Customization,
    /// Generation and status of the config fetch
    pub config_load: ConfigLoad,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Run `action` through the reducer and publish the new record
pub fn dispatch(store: &AppStore, action: Action) {
    log::debug!("dispatch {}", action.name());
    let field = store.customization();
    let mut customization = field.write();
    let next = reduce(&customization, action);
    *customization = next;
}
