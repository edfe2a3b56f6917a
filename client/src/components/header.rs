//! Top strip of the marketing pages with the language switcher.
//!
//! The switcher only records the chosen language; no translation catalog is
//! loaded yet, so the copy stays French.

use leptos::prelude::*;

use crate::state::nav::{Language, NavState};

#[component]
pub fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let language = RwSignal::new(Language::default());

    let options = Language::ALL
        .iter()
        .map(|&lang| {
            view! {
                <li>
                    <button
                        class=move || {
                            if language.get() == lang {
                                "header__language-option header__language-option--selected"
                            } else {
                                "header__language-option"
                            }
                        }
                        on:click=move |_| {
                            language.set(lang);
                            nav.update(NavState::on_language_selected);
                        }
                    >
                        {lang.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <span class="header__notice">"Recrutement de caristes certifiés partout en France"</span>
            <span class="header__spacer"></span>
            <div class="header__language">
                <button
                    class="header__language-toggle"
                    title="Langue"
                    aria-haspopup="true"
                    aria-expanded=move || nav.get().language_menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_language_menu)
                >
                    {move || language.get().code()}
                    " ▾"
                </button>
                <ul class=move || {
                    if nav.get().language_menu_open {
                        "header__language-menu header__language-menu--open"
                    } else {
                        "header__language-menu"
                    }
                }>
                    {options}
                </ul>
            </div>
        </header>
    }
}
