//! "About" section of the landing page.

use leptos::prelude::*;

use crate::util::animation::reveal_style;

pub(crate) struct KeyFigure {
    pub value: &'static str,
    pub caption: &'static str,
}

pub(crate) const KEY_FIGURES: &[KeyFigure] = &[
    KeyFigure { value: "CACES®", caption: "certifications vérifiées sur chaque profil" },
    KeyFigure { value: "48 h", caption: "pour recevoir les premières candidatures" },
    KeyFigure { value: "100 %", caption: "dédié aux métiers de la logistique" },
];

#[component]
pub fn About() -> impl IntoView {
    let figures = KEY_FIGURES
        .iter()
        .enumerate()
        .map(|(i, figure)| {
            view! {
                <div class="about__figure reveal" style=reveal_style(i)>
                    <span class="about__figure-value">{figure.value}</span>
                    <span class="about__figure-caption">{figure.caption}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="about" id="about">
            <h2 class="section-title">"Qui sommes-nous ?"</h2>
            <p class="about__text">
                "Les entrepôts tournent en flux tendu et un poste de cariste vacant coûte cher. "
                "LiftGrid est né pour raccourcir ce délai : un espace unique où les entreprises "
                "publient leurs besoins et où les caristes présentent leurs certifications, "
                "leur expérience et leurs disponibilités."
            </p>
            <div class="about__figures">{figures}</div>
        </section>
    }
}
