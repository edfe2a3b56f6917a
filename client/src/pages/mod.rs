//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks its layout and delegates rendering details to
//! `components`.

pub mod landing;
pub mod login;
pub mod workspace;
