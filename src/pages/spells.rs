//! Spells Page
//!
//! The grimoire: filter controls, result summary and the spell grid.

use leptos::prelude::*;

use crate::components::{SpellCard, SpellDetailModal, SpellFilters};
use crate::context::use_app_context;
use crate::session::use_session;
use crate::spell_list::derive_view;
use crate::store::{use_spell_store, SpellStateStoreFields};

#[component]
pub fn SpellsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_spell_store();
    let session = use_session();

    let visible = Memo::new(move |_| {
        derive_view(&store.spells().read(), &store.criteria().read(), session.viewer_id())
    });
    let total = move || store.spells().with(Vec::len);
    let selected = RwSignal::new(None::<u32>);

    let empty_hint = move || {
        if store.criteria().with(|c| c.is_filtering()) {
            "Try adjusting your search or filters"
        } else {
            "Be the first to submit a spell to the grimoire!"
        }
    };

    view! {
        <section class="spells-page">
            <header class="page-header">
                <h1>"Spell Grimoire"</h1>
                <p>"Discover and vote on magical spells from the community"</p>
            </header>

            <SpellFilters />

            <div class="results-bar">
                <p class="results-summary">
                    {move || format!("Showing {} of {} spells", visible.with(Vec::len), total())}
                </p>
                <button class="refresh-btn" title="Refresh" on:click=move |_| ctx.reload()>"↻"</button>
            </div>

            <Show
                when=move || store.loaded().get()
                fallback=|| view! { <p class="loading">"Gathering magical knowledge from the archives..."</p> }
            >
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            <h3>"No spells found"</h3>
                            <p>{empty_hint}</p>
                        </div>
                    }
                >
                    <div class="spell-grid">
                        <For
                            each=move || visible.get()
                            // Every displayed field, so patched spells re-render
                            key=|spell| {
                                (
                                    spell.id,
                                    spell.vote_count,
                                    spell.user_vote,
                                    spell.name.clone(),
                                    spell.description.clone(),
                                    spell.mana_cost,
                                    spell.damage,
                                    spell.element.clone(),
                                )
                            }
                            children=move |spell| view! {
                                <SpellCard spell=spell on_open=move |id: u32| selected.set(Some(id)) />
                            }
                        />
                    </div>
                </Show>
            </Show>

            <SpellDetailModal selected=selected />
        </section>
    }
}
