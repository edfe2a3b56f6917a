//! Services grid of the landing page. Cards reveal one after another.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::util::animation::reveal_style;

pub(crate) struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "📋",
        title: "Publication d'offres",
        description: "Décrivez le poste, les horaires et les CACES requis ; l'offre est visible immédiatement.",
    },
    ServiceCard {
        icon: "🔎",
        title: "Annuaire de caristes",
        description: "Parcourez des profils filtrés par certification, expérience et zone géographique.",
    },
    ServiceCard {
        icon: "📨",
        title: "Suivi des candidatures",
        description: "Recevez, comparez et répondez aux candidatures depuis un tableau de bord unique.",
    },
    ServiceCard {
        icon: "🚜",
        title: "Missions pour caristes",
        description: "Trouvez des missions en intérim ou en CDI près de chez vous et postulez en un clic.",
    },
    ServiceCard {
        icon: "✅",
        title: "Profils vérifiés",
        description: "Certifications et expériences contrôlées pour recruter en toute confiance.",
    },
    ServiceCard {
        icon: "⏱️",
        title: "Recrutement rapide",
        description: "Des premières candidatures en moins de 48 heures pour les postes urgents.",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    let cards = SERVICES
        .iter()
        .enumerate()
        .map(|(i, card)| {
            view! {
                <article class="services__card reveal" style=reveal_style(i)>
                    <span class="services__icon" aria-hidden="true">{card.icon}</span>
                    <h3 class="services__title">{card.title}</h3>
                    <p class="services__description">{card.description}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="services" id="services">
            <h2 class="section-title">"Nos services"</h2>
            <div class="services__grid">{cards}</div>
        </section>
    }
}
