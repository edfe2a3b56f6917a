//! Public landing page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::hero::Hero;
use crate::components::layout::MarketingLayout;
use crate::components::services::Services;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Hero/>
            <About/>
            <Services/>
        </MarketingLayout>
    }
}
