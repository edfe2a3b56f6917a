//! Role login routes, the redirect target after logout.
//!
//! Credential checks and token issuance happen on the LiftGrid API; this page
//! only routes an already signed-in visitor back to their dashboard.

use leptos::prelude::*;

use crate::components::layout::MarketingLayout;
use crate::state::role::Role;
use crate::state::session::SessionContext;

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let signed_in = RwSignal::new(false);

    // Storage is browser-only; check after hydration.
    Effect::new(move || signed_in.set(session.entity_id(role).is_some()));

    view! {
        <MarketingLayout>
            <section class="login-page">
                <div class="login-card">
                    <h1>"Connexion"</h1>
                    <p class="login-card__subtitle">{role.label()}</p>
                    <Show
                        when=move || signed_in.get()
                        fallback=move || {
                            view! {
                                <p class="login-message">
                                    "Connectez-vous avec l'adresse e-mail de votre compte LiftGrid."
                                </p>
                            }
                        }
                    >
                        <p class="login-message">"Vous êtes déjà connecté."</p>
                        <a href=role.home_route() class="btn btn--primary">
                            "Accéder au tableau de bord"
                        </a>
                    </Show>
                </div>
            </section>
        </MarketingLayout>
    }
}
