//! Navigation shell for authenticated areas (company and driver).
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the role layouts. On mount it starts the one-shot profile fetch
//! and renders placeholders until the profile arrives. Primary links, the
//! profile dropdown and the mobile drawer all come from the `NavSpec`.

#[cfg(test)]
#[path = "nav_shell_test.rs"]
mod nav_shell_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::nav::{NavSpec, NavState};
use crate::state::profile::{DisplayProfile, ShellIdentity};
use crate::state::role::Role;
use crate::state::session::{SessionContext, logout};
use crate::util::profile_fetch::install_profile_fetch;

/// What the avatar button shows for the current identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarContent {
    /// Uploaded logo rendered as an `<img>`.
    Image { src: String, alt: String },
    /// Default icon; no image tag is rendered.
    Icon { initial: String },
}

impl AvatarContent {
    pub fn for_identity(identity: &ShellIdentity) -> Self {
        match &identity.logo_url {
            Some(src) => Self::Image { src: src.clone(), alt: identity.name.clone() },
            None => Self::Icon { initial: identity.initial() },
        }
    }
}

/// Close every menu, clear the role session and return where to navigate.
pub fn end_session(nav: &mut NavState, session: &SessionContext, role: Role) -> &'static str {
    nav.on_logout();
    logout(session, role)
}

/// Role navbar with profile dropdown and mobile drawer.
#[component]
pub fn NavigationShell(spec: NavSpec) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    let nav = RwSignal::new(NavState::default());
    let profile = RwSignal::new(None::<DisplayProfile>);
    install_profile_fetch(spec.role, profile);

    let role = spec.role;
    let identity = Memo::new(move |_| ShellIdentity::resolve(role, profile.get().as_ref()));

    let sign_out = move || {
        let mut state = nav.get_untracked();
        let route = end_session(&mut state, &session, role);
        nav.set(state);
        navigate(route, NavigateOptions::default());
    };
    let sign_out_drawer = sign_out.clone();

    let pathname = location.pathname;
    let link_class = move |href: &'static str, base: &'static str| {
        move || {
            if spec.is_active(href, &pathname.get()) {
                format!("{base} {base}--active")
            } else {
                base.to_owned()
            }
        }
    };

    let avatar = move || match AvatarContent::for_identity(&identity.get()) {
        AvatarContent::Image { src, alt } => view! { <img class="nav-shell__avatar-img" src=src alt=alt/> }.into_any(),
        AvatarContent::Icon { initial } => view! {
            <span class="nav-shell__avatar-icon" aria-hidden="true">{initial}</span>
        }
        .into_any(),
    };

    let primary_links = spec
        .nav_items
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class=link_class(item.href, "nav-shell__link")
                    on:click=move |_| nav.update(NavState::on_nav_link)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    let drawer_links = spec
        .nav_items
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class=link_class(item.href, "nav-shell__drawer-link")
                    on:click=move |_| nav.update(NavState::on_nav_link)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    let dropdown_links = spec
        .dropdown_items
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class="nav-shell__dropdown-item"
                    on:click=move |_| nav.update(NavState::on_dropdown_item)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    let drawer_account_links = spec
        .dropdown_items
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class="nav-shell__drawer-link"
                    on:click=move |_| nav.update(NavState::on_dropdown_item)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-shell" data-role=role.storage_key()>
            <div class="nav-shell__bar">
                <a
                    href=role.home_route()
                    class="nav-shell__brand"
                    on:click=move |_| nav.update(NavState::on_nav_link)
                >
                    "LiftGrid"
                    <span class="nav-shell__brand-tag">{role.label()}</span>
                </a>

                <div class="nav-shell__links">{primary_links}</div>

                <span class="nav-shell__spacer"></span>

                <div class="nav-shell__profile">
                    <button
                        class="nav-shell__avatar"
                        title="Mon compte"
                        aria-haspopup="true"
                        aria-expanded=move || nav.get().dropdown_open.to_string()
                        on:click=move |_| nav.update(NavState::toggle_dropdown)
                    >
                        {avatar}
                    </button>
                    <div class=move || {
                        if nav.get().dropdown_open {
                            "nav-shell__dropdown nav-shell__dropdown--open"
                        } else {
                            "nav-shell__dropdown"
                        }
                    }>
                        <div class="nav-shell__identity">
                            <span class="nav-shell__identity-name">{move || identity.get().name}</span>
                            <span class="nav-shell__identity-email">{move || identity.get().email}</span>
                        </div>
                        {dropdown_links}
                        <button class="nav-shell__dropdown-item nav-shell__logout" on:click=move |_| sign_out()>
                            "Déconnexion"
                        </button>
                    </div>
                </div>

                <button
                    class="nav-shell__menu-toggle"
                    title="Menu"
                    aria-expanded=move || nav.get().mobile_menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_mobile_menu)
                >
                    {move || if nav.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <div
                class=move || {
                    if nav.get().mobile_menu_open {
                        "nav-shell__backdrop nav-shell__backdrop--open"
                    } else {
                        "nav-shell__backdrop"
                    }
                }
                on:click=move |_| nav.update(NavState::on_backdrop)
            ></div>
            <aside class=move || {
                if nav.get().mobile_menu_open {
                    "nav-shell__drawer nav-shell__drawer--open"
                } else {
                    "nav-shell__drawer"
                }
            }>
                <div class="nav-shell__identity">
                    {avatar}
                    <span class="nav-shell__identity-name">{move || identity.get().name}</span>
                    <span class="nav-shell__identity-email">{move || identity.get().email}</span>
                </div>
                {drawer_links}
                <div class="nav-shell__drawer-divider"></div>
                {drawer_account_links}
                <button class="nav-shell__drawer-link nav-shell__logout" on:click=move |_| sign_out_drawer()>
                    "Déconnexion"
                </button>
            </aside>
        </nav>
    }
}
