//! Session Lifecycle
//!
//! Sign-in, restore, config loading and sign-out. Persistence goes through
//! `window.sessionStorage`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use dnc_core::{
    clear_session, plugin_divergence, restore_session, save_session, Action, DivergenceKind,
    Session, SessionError, SessionStore,
};

use crate::commands;
use crate::context::AppContext;
use crate::store::{dispatch, AppStateStoreFields, AppStore};

/// `SessionStore` over the tab's `sessionStorage`
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    pub fn open() -> Result<Self, SessionError> {
        let window = web_sys::window().ok_or(SessionError::Unavailable)?;
        let storage = window
            .session_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or(SessionError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.storage
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// Pick up a session saved earlier in this tab
pub fn restore(store: AppStore, ctx: AppContext) {
    let restored = BrowserSessionStore::open().and_then(|browser| restore_session(&browser));
    match restored {
        Ok(Some(session)) => {
            log::info!("restored session for {}", session.user.user);
            apply(store, ctx, session);
        }
        Ok(None) => log::debug!("no stored session"),
        Err(e) => log::warn!("could not read stored session: {}", e),
    }
}

/// Persist a fresh session and load its config
pub fn sign_in(store: AppStore, ctx: AppContext, session: Session) {
    if let Err(e) = BrowserSessionStore::open().and_then(|browser| save_session(&browser, &session)) {
        log::warn!("session not persisted: {}", e);
    }
    apply(store, ctx, session);
}

fn apply(store: AppStore, ctx: AppContext, session: Session) {
    let token = session.token.clone();
    dispatch(&store, Action::SetMyToken { token: Some(session.token) });
    dispatch(&store, Action::SetMyUser { user: Some(session.user) });
    load_config(store, ctx, token);
}

/// Fetch `/cfgall` and publish it. Responses from superseded fetches are
/// dropped.
pub fn load_config(store: AppStore, ctx: AppContext, token: String) {
    let generation = store.config_load().write().begin();
    let settings = ctx.settings.get_value();
    log::debug!("loading config (generation {})", generation);

    spawn_local(async move {
        let result = commands::fetch_config(&settings, &token).await;
        if !store.config_load().write().finish(generation, &result) {
            return;
        }

        match result {
            Ok(config) => {
                log::info!(
                    "config loaded: {} features, {} aliases, {} plugins",
                    config.features.len(),
                    config.alias.len(),
                    config.plugins.len()
                );
                let divergent = ctx.routes.with_value(|routes| plugin_divergence(&config, routes));
                for d in divergent {
                    match d.kind {
                        DivergenceKind::HiddenButRoutable => log::warn!(
                            "plugin {} is hidden from the menu but its '{}' routes stay reachable",
                            d.menu_id,
                            d.plugin_key
                        ),
                        DivergenceKind::VisibleButUnroutable => log::warn!(
                            "plugin {} is shown in the menu but has no registered route",
                            d.menu_id
                        ),
                    }
                }
                dispatch(&store, Action::SetMyConfig { config: Some(config) });
            }
            Err(e) => {
                log::error!("config load failed: {}", e);
                dispatch(&store, Action::SetMyConfig { config: None });
            }
        }
    });
}

/// Forget the session, locally and in storage
pub fn sign_out(store: AppStore) {
    store.config_load().write().reset();
    if let Err(e) = BrowserSessionStore::open().and_then(|browser| clear_session(&browser)) {
        log::warn!("could not clear stored session: {}", e);
    }
    dispatch(&store, Action::SetMyConfig { config: None });
    dispatch(&store, Action::SetMyUser { user: None });
    dispatch(&store, Action::SetMyToken { token: None });
    log::info!("signed out");
}
