//! Account roles and everything that varies by role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage keys, API collections, routes and placeholder identity all hang
//! off `Role` so the session store, profile fetch and navigation shell share
//! one source of truth instead of per-role copies.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// The kind of account signed in to a protected area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Company,
    Driver,
}

impl Role {
    /// `localStorage` key holding the serialized entity.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Driver => "driver",
        }
    }

    /// `localStorage` key holding the access token.
    pub fn token_key(self) -> &'static str {
        match self {
            Self::Company => "companyToken",
            Self::Driver => "driverToken",
        }
    }

    /// REST collection the entity record lives under.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Company => "companies",
            Self::Driver => "drivers",
        }
    }

    pub fn login_route(self) -> &'static str {
        match self {
            Self::Company => "/company/login",
            Self::Driver => "/driver/login",
        }
    }

    pub fn home_route(self) -> &'static str {
        match self {
            Self::Company => "/company/dashboard",
            Self::Driver => "/driver/dashboard",
        }
    }

    /// Name rendered before (or instead of) a fetched profile.
    pub fn placeholder_name(self) -> &'static str {
        match self {
            Self::Company => "Entreprise",
            Self::Driver => "Cariste",
        }
    }

    pub fn placeholder_email(self) -> &'static str {
        match self {
            Self::Company => "entreprise@email.com",
            Self::Driver => "cariste@email.com",
        }
    }

    /// Human label used in headings and login screens.
    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Espace entreprise",
            Self::Driver => "Espace cariste",
        }
    }
}
