//! Session store for the signed-in company or driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the entity and its token; every protected layout reads the
//! entity id on mount; logout removes both. Components never touch browser
//! storage directly: they receive a `SessionContext` through Leptos context,
//! which lets tests swap in `MemorySessionStore`.
//!
//! ERROR HANDLING
//! ==============
//! A stored record that does not parse is treated exactly like a missing one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::AuthenticatedEntity;
use crate::state::role::Role;

/// Raw key/value persistence backing the session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Mutex::new(map) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Typed session operations over an injected `SessionStore`.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The persisted entity for `role`, or `None` when absent or unreadable.
    pub fn entity(&self, role: Role) -> Option<AuthenticatedEntity> {
        let raw = self.store.get(role.storage_key())?;
        match serde_json::from_str::<Option<AuthenticatedEntity>>(&raw) {
            Ok(entity) => entity,
            Err(e) => {
                log::warn!("ignoring malformed {} session record: {e}", role.storage_key());
                None
            }
        }
    }

    /// Id of the persisted entity, used to key the profile request.
    pub fn entity_id(&self, role: Role) -> Option<String> {
        self.entity(role)?.entity_id().map(str::to_owned)
    }

    pub fn token(&self, role: Role) -> Option<String> {
        self.store.get(role.token_key()).filter(|t| !t.is_empty())
    }

    /// Persist the entity and its token after a successful login.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the entity cannot be encoded.
    pub fn sign_in(&self, role: Role, entity: &AuthenticatedEntity, token: &str) -> Result<(), serde_json::Error> {
        let raw = serde_json::to_string(entity)?;
        self.store.set(role.storage_key(), &raw);
        self.store.set(role.token_key(), token);
        Ok(())
    }

    /// Remove entity and token together.
    pub fn clear(&self, role: Role) {
        self.store.remove(role.storage_key());
        self.store.remove(role.token_key());
    }
}

/// Clear the role's session and return the route to redirect to.
///
/// Safe to call when already logged out: storage is untouched and the
/// login route is still returned.
pub fn logout(session: &SessionContext, role: Role) -> &'static str {
    session.clear(role);
    log::info!("{} session cleared", role.storage_key());
    role.login_route()
}
