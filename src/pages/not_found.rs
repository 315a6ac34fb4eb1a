use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"404"</h1>
            <p>"This page has vanished into the ether."</p>
            <A href=Page::Home.path() attr:class="primary-btn">"Return Home"</A>
        </section>
    }
}
