use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::{AuthenticatedEntity, Logo};
use crate::state::profile::ShellIdentity;
use crate::state::session::MemorySessionStore;

/// Records every request and replies with a canned result.
struct FakeApi {
    calls: AtomicUsize,
    requests: Mutex<Vec<(Role, String, Option<String>)>>,
    reply: Result<AuthenticatedEntity, ApiError>,
}

impl FakeApi {
    fn replying(reply: Result<AuthenticatedEntity, ApiError>) -> Self {
        Self { calls: AtomicUsize::new(0), requests: Mutex::new(Vec::new()), reply }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl ProfileApi for FakeApi {
    async fn fetch_entity(&self, role: Role, id: &str, token: Option<&str>) -> Result<AuthenticatedEntity, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((role, id.to_owned(), token.map(str::to_owned)));
        self.reply.clone()
    }
}

fn session_with(entries: &[(&str, &str)]) -> SessionContext {
    SessionContext::new(Arc::new(MemorySessionStore::with_entries(entries.iter().copied())))
}

fn acme() -> AuthenticatedEntity {
    AuthenticatedEntity {
        id: None,
        plain_id: None,
        name: Some("Acme".to_owned()),
        email: Some("a@x.com".to_owned()),
        logo: None,
    }
}

// =============================================================
// No session
// =============================================================

#[test]
fn absent_session_never_calls_api() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[]);

    let profile = block_on(fetch_display_profile(&session, &api, Role::Company));

    assert!(profile.is_none());
    assert_eq!(api.calls(), 0);
    let identity = ShellIdentity::resolve(Role::Company, profile.as_ref());
    assert_eq!(identity.name, "Entreprise");
    assert_eq!(identity.email, "entreprise@email.com");
}

#[test]
fn malformed_session_never_calls_api() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("company", "{\"_id\":")]);

    assert!(block_on(fetch_display_profile(&session, &api, Role::Company)).is_none());
    assert_eq!(api.calls(), 0);
}

#[test]
fn session_without_id_never_calls_api() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("company", r#"{"name":"Acme"}"#)]);

    assert!(block_on(fetch_display_profile(&session, &api, Role::Company)).is_none());
    assert_eq!(api.calls(), 0);
}

#[test]
fn session_id_with_path_separator_never_calls_api() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("company", r#"{"_id":"abc/../admin"}"#)]);

    assert!(block_on(fetch_display_profile(&session, &api, Role::Company)).is_none());
    assert_eq!(api.calls(), 0);
}

// =============================================================
// Successful fetch
// =============================================================

#[test]
fn session_with_both_id_keys_fetches_once() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("company", r#"{"_id":"abc","id":"abc"}"#)]);

    let profile = block_on(fetch_display_profile(&session, &api, Role::Company));

    assert!(profile.is_some());
    assert_eq!(api.calls(), 1);
    assert_eq!(api.requests.lock().unwrap()[0].1, "abc");
}

#[test]
fn stored_id_fetches_once_and_shows_profile() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("company", r#"{"_id":"abc"}"#)]);

    let profile = block_on(fetch_display_profile(&session, &api, Role::Company)).unwrap();

    assert_eq!(api.calls(), 1);
    assert_eq!(api.requests.lock().unwrap()[0], (Role::Company, "abc".to_owned(), None));
    assert!(profile.logo_url.is_none());
    let identity = ShellIdentity::resolve(Role::Company, Some(&profile));
    assert_eq!(identity.name, "Acme");
    assert_eq!(identity.email, "a@x.com");
    assert!(identity.logo_url.is_none());
}

#[test]
fn fetched_profile_keeps_requested_id_when_response_omits_it() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("company", r#"{"_id":"abc"}"#)]);

    let profile = block_on(fetch_display_profile(&session, &api, Role::Company)).unwrap();
    assert_eq!(profile.entity.entity_id(), Some("abc"));
}

#[test]
fn stored_token_is_forwarded() {
    let api = FakeApi::replying(Ok(acme()));
    let session = session_with(&[("driver", r#"{"_id":"d1"}"#), ("driverToken", "tok-9")]);

    block_on(fetch_display_profile(&session, &api, Role::Driver));

    assert_eq!(
        api.requests.lock().unwrap()[0],
        (Role::Driver, "d1".to_owned(), Some("tok-9".to_owned()))
    );
}

#[test]
fn logo_response_renders_data_uri() {
    let mut entity = acme();
    entity.logo = Some(Logo { content_type: Some("image/png".to_owned()), data: Some("iVBORw0KGgo=".to_owned()) });
    let api = FakeApi::replying(Ok(entity));
    let session = session_with(&[("company", r#"{"_id":"abc"}"#)]);

    let profile = block_on(fetch_display_profile(&session, &api, Role::Company)).unwrap();
    assert_eq!(profile.logo_url.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));
}

// =============================================================
// Failed fetch
// =============================================================

#[test]
fn failed_fetch_leaves_profile_unset_without_retry() {
    let api = FakeApi::replying(Err(ApiError::Status(500)));
    let session = session_with(&[("company", r#"{"_id":"abc"}"#)]);

    let profile = block_on(fetch_display_profile(&session, &api, Role::Company));

    assert!(profile.is_none());
    assert_eq!(api.calls(), 1);
}

// =============================================================
// MountToken
// =============================================================

#[test]
fn live_token_delivers() {
    let token = MountToken::new();
    let mut seen = None;
    assert!(token.deliver(7, |v| seen = Some(v)));
    assert_eq!(seen, Some(7));
}

#[test]
fn released_token_drops_late_result() {
    let token = MountToken::new();
    let cleanup = token.clone();
    cleanup.release();

    let mut seen = None;
    assert!(!token.deliver(7, |v| seen = Some(v)));
    assert_eq!(seen, None);
    assert!(!token.is_live());
}
