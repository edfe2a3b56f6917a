//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing sections are static content; the navigation shell and layouts read
//! the session and API clients from Leptos context providers.

pub mod about;
pub mod footer;
pub mod header;
pub mod hero;
pub mod layout;
pub mod nav_shell;
pub mod navbar;
pub mod services;
