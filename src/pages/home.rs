//! Home Page
//!
//! Landing hero with calls to action and the community's top spells.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::element_selector::{element_class, element_label};
use crate::context::Page;
use crate::session::use_session;
use crate::spell_list::{derive_view, ListCriteria, SortKey};
use crate::store::{use_spell_store, SpellStateStoreFields};

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let store = use_spell_store();

    let featured = Memo::new(move |_| {
        let criteria = ListCriteria {
            sort: SortKey::MostVoted,
            ..Default::default()
        };
        let mut top = derive_view(&store.spells().read(), &criteria, None);
        top.truncate(FEATURED_COUNT);
        top
    });

    view! {
        <section class="home-page">
            <div class="hero">
                <h1>"SpellForger"</h1>
                <p>"Craft, share and vote on spells with fellow mages."</p>
                <div class="hero-actions">
                    <A href=Page::Spells.path() attr:class="primary-btn">
                        "Browse Spells"
                    </A>
                    {move || if session.is_authenticated() {
                        view! {
                            <A href=Page::Submit.path() attr:class="secondary-btn">
                                "Submit a Spell"
                            </A>
                        }.into_any()
                    } else {
                        view! {
                            <A href=Page::Register.path() attr:class="secondary-btn">
                                "Join the Guild"
                            </A>
                        }.into_any()
                    }}
                </div>
            </div>

            <Show when=move || featured.with(|f| !f.is_empty())>
                <div class="featured">
                    <h2>"Most Voted"</h2>
                    <ul class="featured-list">
                        <For
                            each=move || featured.get()
                            key=|spell| (spell.id, spell.vote_count)
                            children=move |spell| view! {
                                <li class="featured-item">
                                    <A href=Page::Spells.path() attr:class="featured-name">{spell.name.clone()}</A>
                                    <span class=element_class(&spell.element)>{element_label(&spell.element)}</span>
                                    <span class="featured-votes">{format!("{} votes", spell.vote_count)}</span>
                                </li>
                            }
                        />
                    </ul>
                </div>
            </Show>
        </section>
    }
}
