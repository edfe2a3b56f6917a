//! Navigation chrome: link tables per role and the open/closed menu flags.
//!
//! DESIGN
//! ======
//! Company and driver navbars share one shell. Everything that differs
//! between them lives in `NavSpec`; the shell itself only knows how to render
//! a spec and drive `NavState`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::role::Role;

/// A single link in the primary bar or the profile dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const COMPANY_NAV: &[NavItem] = &[
    NavItem { label: "Tableau de bord", href: "/company/dashboard" },
    NavItem { label: "Mes offres", href: "/company/jobs" },
    NavItem { label: "Publier une offre", href: "/company/jobs/new" },
    NavItem { label: "Candidatures", href: "/company/applications" },
    NavItem { label: "Caristes", href: "/company/drivers" },
];

const COMPANY_DROPDOWN: &[NavItem] = &[
    NavItem { label: "Mon profil", href: "/company/profile" },
    NavItem { label: "Paramètres", href: "/company/settings" },
];

const DRIVER_NAV: &[NavItem] = &[
    NavItem { label: "Tableau de bord", href: "/driver/dashboard" },
    NavItem { label: "Offres d'emploi", href: "/driver/jobs" },
    NavItem { label: "Mes candidatures", href: "/driver/applications" },
];

const DRIVER_DROPDOWN: &[NavItem] = &[
    NavItem { label: "Mon profil", href: "/driver/profile" },
    NavItem { label: "Paramètres", href: "/driver/settings" },
];

/// Capability set the navigation shell is parameterized by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSpec {
    pub role: Role,
    pub nav_items: &'static [NavItem],
    /// Dropdown links; logout is always appended by the shell.
    pub dropdown_items: &'static [NavItem],
}

impl NavSpec {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Company => Self { role, nav_items: COMPANY_NAV, dropdown_items: COMPANY_DROPDOWN },
            Role::Driver => Self { role, nav_items: DRIVER_NAV, dropdown_items: DRIVER_DROPDOWN },
        }
    }

    /// Whether `href` is the link for the current `pathname`.
    ///
    /// The home link only matches exactly; others also match nested paths,
    /// preferring the longest matching link.
    pub fn is_active(&self, href: &str, pathname: &str) -> bool {
        let matches = |candidate: &str| pathname == candidate || pathname.starts_with(&format!("{candidate}/"));
        if href == self.role.home_route() {
            return pathname == href;
        }
        if !matches(href) {
            return false;
        }
        !self
            .nav_items
            .iter()
            .any(|item| item.href.len() > href.len() && matches(item.href))
    }
}

/// Open/closed flags for a navbar. The flags are independent toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_menu_open: bool,
    pub dropdown_open: bool,
    pub language_menu_open: bool,
}

impl NavState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    /// A primary navigation link was followed.
    pub fn on_nav_link(&mut self) {
        self.mobile_menu_open = false;
    }

    /// The dimmed area behind the mobile drawer was clicked.
    pub fn on_backdrop(&mut self) {
        self.mobile_menu_open = false;
    }

    /// A dropdown entry was followed.
    pub fn on_dropdown_item(&mut self) {
        self.dropdown_open = false;
        self.mobile_menu_open = false;
    }

    pub fn on_language_selected(&mut self) {
        self.language_menu_open = false;
    }

    pub fn on_logout(&mut self) {
        *self = Self::default();
    }
}

/// Interface languages offered by the header switcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    French,
    English,
    Arabic,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::French, Self::English, Self::Arabic];

    pub fn code(self) -> &'static str {
        match self {
            Self::French => "FR",
            Self::English => "EN",
            Self::Arabic => "AR",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::French => "Français",
            Self::English => "English",
            Self::Arabic => "العربية",
        }
    }
}
