//! Durable session persistence.
//!
//! The token and the username live under two keys of an origin-scoped
//! key-value store. [`SessionStore`] treats them as one unit: both are
//! written together, cleared together, and a half-present pair is
//! discarded on load.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::data::AuthToken;
use crate::errors::StoreError;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "currentUser";

/// Raw string storage, e.g. the browser's `localStorage`.
pub trait KeyValueBackend {
    fn get(&self, key: &'static str) -> Option<String>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &'static str);
}

/// In-memory backend. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend(Rc<RefCell<HashMap<&'static str, String>>>);

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &'static str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: &'static str) {
        self.0.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: AuthToken,
    pub username: String,
}

impl Session {
    pub fn new(token: AuthToken, username: impl Into<String>) -> Self {
        Self {
            token,
            username: username.into(),
        }
    }
}

pub struct SessionStore<K> {
    backend: K,
}

impl<K: KeyValueBackend> SessionStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let username = self.backend.get(USER_KEY).filter(|u| !u.is_empty());

        match (token, username) {
            (Some(token), Some(username)) => Some(Session::new(AuthToken::new(token), username)),
            (None, None) => None,
            _ => {
                tracing::warn!("Discarding half-written session in storage");
                self.clear();
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        self.backend.set(TOKEN_KEY, session.token.as_str())?;
        if let Err(err) = self.backend.set(USER_KEY, &session.username) {
            self.backend.remove(TOKEN_KEY);
            return Err(err);
        }
        Ok(())
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
