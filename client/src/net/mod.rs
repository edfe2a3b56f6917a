//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the LiftGrid backend and `types` defines the
//! shared wire schema, which is also the persisted session format.

pub mod api;
pub mod types;
