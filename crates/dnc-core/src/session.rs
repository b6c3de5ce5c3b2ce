//! Session Persistence
//!
//! The token and user record survive page reloads in tab-scoped key-value
//! storage under `myToken` and `myUser`. Storage access goes through the
//! `SessionStore` trait so the browser backend can be swapped for the
//! in-memory one in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::auth::Session;
use crate::domain::User;

pub const TOKEN_KEY: &str = "myToken";
pub const USER_KEY: &str = "myUser";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("could not encode user record: {0}")]
    Encode(String),
}

/// String key-value storage scoped to the browser tab
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Persist token and user
pub fn save_session(store: &impl SessionStore, session: &Session) -> Result<(), SessionError> {
    let user = serde_json::to_string(&session.user).map_err(|e| SessionError::Encode(e.to_string()))?;
    store.set(TOKEN_KEY, &session.token)?;
    store.set(USER_KEY, &user)
}

/// Read back a saved session.
///
/// Returns `None` when either key is missing. A user record that no longer
/// decodes is dropped together with the token.
pub fn restore_session(store: &impl SessionStore) -> Result<Option<Session>, SessionError> {
    let (Some(token), Some(raw_user)) = (store.get(TOKEN_KEY)?, store.get(USER_KEY)?) else {
        return Ok(None);
    };

    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Ok(Some(Session { token, user })),
        Err(e) => {
            log::warn!("discarding stored session, user record unreadable: {}", e);
            clear_session(store)?;
            Ok(None)
        }
    }
}

pub fn clear_session(store: &impl SessionStore) -> Result<(), SessionError> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_KEY)
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: User::new("ops", "3"),
        }
    }

    #[test]
    fn test_save_and_restore() {
        let store = MemorySessionStore::new();
        save_session(&store, &session()).unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert_eq!(restore_session(&store).unwrap(), Some(session()));
    }

    #[test]
    fn test_restore_empty_store() {
        let store = MemorySessionStore::new();
        assert_eq!(restore_session(&store).unwrap(), None);

        store.set(TOKEN_KEY, "tok").unwrap();
        assert_eq!(restore_session(&store).unwrap(), None);
    }

    #[test]
    fn test_unreadable_user_clears_session() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        assert_eq!(restore_session(&store).unwrap(), None);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_session() {
        let store = MemorySessionStore::new();
        save_session(&store, &session()).unwrap();
        clear_session(&store).unwrap();
        assert_eq!(restore_session(&store).unwrap(), None);
    }
}
