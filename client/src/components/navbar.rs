//! Plain navbar for unauthenticated marketing pages.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::nav::{NavItem, NavState};
use crate::state::role::Role;

pub(crate) const SECTION_LINKS: &[NavItem] = &[
    NavItem { label: "Accueil", href: "/#hero" },
    NavItem { label: "À propos", href: "/#about" },
    NavItem { label: "Services", href: "/#services" },
    NavItem { label: "Contact", href: "/#contact" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let links = SECTION_LINKS
        .iter()
        .map(|item| {
            view! {
                <a href=item.href class="navbar__link" on:click=move |_| nav.update(NavState::on_nav_link)>
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"LiftGrid"</a>
            <button
                class="navbar__menu-toggle"
                title="Menu"
                aria-expanded=move || nav.get().mobile_menu_open.to_string()
                on:click=move |_| nav.update(NavState::toggle_mobile_menu)
            >
                {move || if nav.get().mobile_menu_open { "✕" } else { "☰" }}
            </button>
            <div class=move || {
                if nav.get().mobile_menu_open { "navbar__menu navbar__menu--open" } else { "navbar__menu" }
            }>
                {links}
                <a
                    href=Role::Company.login_route()
                    class="btn navbar__cta"
                    on:click=move |_| nav.update(NavState::on_nav_link)
                >
                    "Espace entreprise"
                </a>
                <a
                    href=Role::Driver.login_route()
                    class="btn btn--primary navbar__cta"
                    on:click=move |_| nav.update(NavState::on_nav_link)
                >
                    "Espace cariste"
                </a>
            </div>
        </nav>
    }
}
