//! Protected role pages rendered inside the company or driver layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Job listings, applications and settings screens are owned by other
//! modules of the product; here each route only gets its heading inside the
//! role layout so navigation and the session shell can be exercised end to end.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::layout::{CompanyLayout, DriverLayout};
use crate::state::role::Role;

/// Protected screens reachable from the navigation shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Jobs,
    NewJob,
    Applications,
    Drivers,
    Profile,
    Settings,
}

impl Section {
    pub fn title(self, role: Role) -> &'static str {
        match (self, role) {
            (Self::Dashboard, _) => "Tableau de bord",
            (Self::Jobs, Role::Company) => "Mes offres",
            (Self::Jobs, Role::Driver) => "Offres d'emploi",
            (Self::NewJob, _) => "Publier une offre",
            (Self::Applications, Role::Company) => "Candidatures reçues",
            (Self::Applications, Role::Driver) => "Mes candidatures",
            (Self::Drivers, _) => "Caristes",
            (Self::Profile, _) => "Mon profil",
            (Self::Settings, _) => "Paramètres du compte",
        }
    }
}

#[component]
pub fn WorkspacePage(role: Role, section: Section) -> impl IntoView {
    let body = move || {
        view! {
            <section class="workspace">
                <h1 class="workspace__title">{section.title(role)}</h1>
            </section>
        }
    };

    match role {
        Role::Company => view! { <CompanyLayout>{body()}</CompanyLayout> }.into_any(),
        Role::Driver => view! { <DriverLayout>{body()}</DriverLayout> }.into_any(),
    }
}
