//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`role`, `session`, `profile`, `nav`) so
//! components depend on small focused models that can be tested without a
//! browser.

pub mod nav;
pub mod profile;
pub mod role;
pub mod session;
