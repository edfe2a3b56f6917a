//! Landing hero: headline plus one call to action per audience.

use leptos::prelude::*;

use crate::state::role::Role;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="hero">
            <div class="hero__background" aria-hidden="true"></div>
            <div class="hero__content reveal">
                <h1 class="hero__title">
                    "Le bon cariste, "
                    <span class="hero__highlight">"au bon moment."</span>
                </h1>
                <p class="hero__subtitle">
                    "LiftGrid met en relation les entreprises logistiques avec des caristes "
                    "qualifiés, disponibles et vérifiés. Publiez une offre ou trouvez votre "
                    "prochaine mission en quelques minutes."
                </p>
                <div class="hero__actions">
                    <a href=Role::Company.login_route() class="btn btn--primary hero__cta">
                        "Je recrute"
                    </a>
                    <a href=Role::Driver.login_route() class="btn hero__cta">
                        "Je cherche une mission"
                    </a>
                </div>
            </div>
        </section>
    }
}
