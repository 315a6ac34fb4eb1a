//! Navigation Bar Component
//!
//! Site header with page links and auth controls. The router marks the
//! current link with `aria-current="page"`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::{use_page_navigate, Page};
use crate::notify::{use_toaster, Notice};
use crate::session::use_session;

#[component]
fn NavLink(page: Page, label: &'static str) -> impl IntoView {
    view! {
        <A href=page.path() attr:class="nav-link">
            {label}
        </A>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_page_navigate();

    let logout = move |_| {
        session.logout();
        toaster.notify(Notice::logged_out());
        navigate(Page::Home);
    };

    view! {
        <header class="nav-bar">
            <A href=Page::Home.path() attr:class="nav-brand">
                "SpellForger"
            </A>

            <nav class="nav-links">
                <NavLink page=Page::Home label="Home" />
                <NavLink page=Page::Spells label="Spells" />
                <NavLink page=Page::Diagnostics label="Diagnostics" />
                <Show when=move || session.is_authenticated()>
                    <NavLink page=Page::Submit label="Submit a Spell" />
                </Show>
            </nav>

            <div class="nav-auth">
                {move || match session.user() {
                    Some(user) => {
                        let logout = logout.clone();
                        view! {
                            <span class="nav-welcome">"Welcome, " {user.username}</span>
                            <button class="nav-btn" on:click=logout>"Logout"</button>
                        }.into_any()
                    }
                    None => view! {
                        <NavLink page=Page::Login label="Login" />
                        <NavLink page=Page::Register label="Register" />
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
