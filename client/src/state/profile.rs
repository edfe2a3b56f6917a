//! Display model for the signed-in account shown in the navigation shell.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::AuthenticatedEntity;
use crate::state::role::Role;

/// Fetched entity plus its derived logo URI. Replaced whole on every fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayProfile {
    pub entity: AuthenticatedEntity,
    pub logo_url: Option<String>,
}

impl DisplayProfile {
    pub fn from_entity(entity: AuthenticatedEntity) -> Self {
        let logo_url = entity.logo.as_ref().and_then(|logo| logo.data_uri());
        Self { entity, logo_url }
    }
}

/// What the shell actually renders: profile fields with role placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellIdentity {
    pub name: String,
    pub email: String,
    pub logo_url: Option<String>,
}

impl ShellIdentity {
    pub fn resolve(role: Role, profile: Option<&DisplayProfile>) -> Self {
        let entity = profile.map(|p| &p.entity);
        Self {
            name: or_placeholder(entity.and_then(|e| e.name.as_deref()), role.placeholder_name()),
            email: or_placeholder(entity.and_then(|e| e.email.as_deref()), role.placeholder_email()),
            logo_url: profile.and_then(|p| p.logo_url.clone()),
        }
    }

    /// First letter of the name for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_owned()
}
