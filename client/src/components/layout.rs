//! Page layouts: navigation, then page content, then footer.
//!
//! The two role layouts differ only in the `NavSpec` handed to the shell.
//! Marketing pages get the language header and the plain navbar instead.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::nav_shell::NavigationShell;
use crate::components::navbar::Navbar;
use crate::state::nav::NavSpec;
use crate::state::role::Role;

/// Shell for `role`, page content, footer.
#[component]
pub fn RoleLayout(role: Role, children: Children) -> impl IntoView {
    view! {
        <div class="layout layout--role">
            <NavigationShell spec=NavSpec::for_role(role)/>
            <main class="layout__content">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn CompanyLayout(children: Children) -> impl IntoView {
    view! { <RoleLayout role=Role::Company>{children()}</RoleLayout> }
}

#[component]
pub fn DriverLayout(children: Children) -> impl IntoView {
    view! { <RoleLayout role=Role::Driver>{children()}</RoleLayout> }
}

#[component]
pub fn MarketingLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout layout--marketing">
            <Header/>
            <Navbar/>
            <main class="layout__content">{children()}</main>
            <Footer/>
        </div>
    }
}
