//! Site footer shared by every layout.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::state::nav::NavItem;

pub(crate) struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavItem],
}

pub(crate) const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Entreprises",
        links: &[
            NavItem { label: "Publier une offre", href: "/company/jobs/new" },
            NavItem { label: "Trouver des caristes", href: "/company/drivers" },
            NavItem { label: "Espace entreprise", href: "/company/login" },
        ],
    },
    FooterColumn {
        title: "Caristes",
        links: &[
            NavItem { label: "Offres d'emploi", href: "/driver/jobs" },
            NavItem { label: "Mes candidatures", href: "/driver/applications" },
            NavItem { label: "Espace cariste", href: "/driver/login" },
        ],
    },
    FooterColumn {
        title: "LiftGrid",
        links: &[
            NavItem { label: "À propos", href: "/#about" },
            NavItem { label: "Services", href: "/#services" },
            NavItem { label: "Contact", href: "/#contact" },
        ],
    },
];

pub(crate) const CONTACT_EMAIL: &str = "contact@liftgrid.fr";

#[component]
pub fn Footer() -> impl IntoView {
    let columns = FOOTER_COLUMNS
        .iter()
        .map(|column| {
            let links = column
                .links
                .iter()
                .map(|link| view! { <li><a href=link.href class="footer__link">{link.label}</a></li> })
                .collect_view();
            view! {
                <div class="footer__column">
                    <h4 class="footer__title">{column.title}</h4>
                    <ul class="footer__links">{links}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="footer" id="contact">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo">"LiftGrid"</span>
                    <p class="footer__tagline">"La plateforme qui connecte caristes et entreprises logistiques."</p>
                    <a class="footer__contact" href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </div>
                {columns}
            </div>
            <p class="footer__copyright">"© LiftGrid. Tous droits réservés."</p>
        </footer>
    }
}
