//! One-shot profile fetch bound to the lifetime of a navigation shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected layout mounts a shell, which reads the persisted entity id
//! and loads the full record once. The result lands in a shell-local signal;
//! nothing re-fetches until the shell mounts again.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and leave the profile unset, so the shell keeps
//! its placeholder identity. There is no retry.
//!
//! CANCELLATION
//! ============
//! A `MountToken` is released in `on_cleanup`. A response that arrives after
//! unmount is dropped instead of being written into a disposed signal.

#[cfg(test)]
#[path = "profile_fetch_test.rs"]
mod profile_fetch_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::ProfileApi;
use crate::state::profile::DisplayProfile;
use crate::state::role::Role;
use crate::state::session::SessionContext;

/// Liveness flag shared between a mounted component and its async work.
#[derive(Clone, Debug)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Hand `value` to `sink` only while still mounted. Returns whether it was delivered.
    pub fn deliver<T>(&self, value: T, sink: impl FnOnce(T)) -> bool {
        if !self.is_live() {
            return false;
        }
        sink(value);
        true
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the display profile for the persisted `role` entity.
///
/// Returns `None` without touching the network when no entity id is stored,
/// and `None` after logging when the request fails.
pub async fn fetch_display_profile(session: &SessionContext, api: &dyn ProfileApi, role: Role) -> Option<DisplayProfile> {
    let id = session.entity_id(role)?;
    let token = session.token(role);
    match api.fetch_entity(role, &id, token.as_deref()).await {
        Ok(mut entity) => {
            if entity.entity_id().is_none() {
                entity.id = Some(id);
            }
            Some(DisplayProfile::from_entity(entity))
        }
        Err(e) => {
            log::warn!("profile fetch failed for {} {id}: {e}", role.storage_key());
            None
        }
    }
}

/// Start the profile fetch for a just-mounted shell, writing into `profile`.
///
/// Reads `SessionContext` and `Arc<dyn ProfileApi>` from context. Browser only;
/// during SSR the shell renders placeholders.
pub fn install_profile_fetch(role: Role, profile: RwSignal<Option<DisplayProfile>>) {
    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionContext>();
        let api = expect_context::<Arc<dyn ProfileApi>>();
        let token = MountToken::new();
        let cleanup_token = token.clone();
        on_cleanup(move || cleanup_token.release());

        leptos::task::spawn_local(async move {
            if let Some(loaded) = fetch_display_profile(&session, api.as_ref(), role).await {
                if !token.deliver(loaded, |p| profile.set(Some(p))) {
                    log::debug!("dropping {} profile loaded after unmount", role.storage_key());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, profile);
    }
}
