//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::{HttpProfileApi, ProfileApi};
use crate::pages::{
    landing::LandingPage,
    login::LoginPage,
    workspace::{Section, WorkspacePage},
};
use crate::state::role::Role;
use crate::state::session::SessionContext;
use crate::util::storage::BrowserSessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and API client to every layout and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionContext::new(Arc::new(BrowserSessionStore)));
    let api: Arc<dyn ProfileApi> = Arc::new(HttpProfileApi::new(ApiConfig::from_build_env()));
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/liftgrid.css"/>
        <Title text="LiftGrid"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>

                <Route
                    path=(StaticSegment("company"), StaticSegment("login"))
                    view=|| view! { <LoginPage role=Role::Company/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("dashboard"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::Dashboard/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("jobs"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::Jobs/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("jobs"), StaticSegment("new"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::NewJob/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("applications"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::Applications/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("drivers"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::Drivers/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("profile"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::Profile/> }
                />
                <Route
                    path=(StaticSegment("company"), StaticSegment("settings"))
                    view=|| view! { <WorkspacePage role=Role::Company section=Section::Settings/> }
                />

                <Route
                    path=(StaticSegment("driver"), StaticSegment("login"))
                    view=|| view! { <LoginPage role=Role::Driver/> }
                />
                <Route
                    path=(StaticSegment("driver"), StaticSegment("dashboard"))
                    view=|| view! { <WorkspacePage role=Role::Driver section=Section::Dashboard/> }
                />
                <Route
                    path=(StaticSegment("driver"), StaticSegment("jobs"))
                    view=|| view! { <WorkspacePage role=Role::Driver section=Section::Jobs/> }
                />
                <Route
                    path=(StaticSegment("driver"), StaticSegment("applications"))
                    view=|| view! { <WorkspacePage role=Role::Driver section=Section::Applications/> }
                />
                <Route
                    path=(StaticSegment("driver"), StaticSegment("profile"))
                    view=|| view! { <WorkspacePage role=Role::Driver section=Section::Profile/> }
                />
                <Route
                    path=(StaticSegment("driver"), StaticSegment("settings"))
                    view=|| view! { <WorkspacePage role=Role::Driver section=Section::Settings/> }
                />
            </Routes>
        </Router>
    }
}
