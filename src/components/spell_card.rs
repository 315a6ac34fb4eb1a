//! Spell Card Component
//!
//! One spell in the grid: name, element, votes and a description preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::element_selector::{element_class, element_label};
use crate::models::{Spell, VoteType};
use crate::notify::{use_toaster, Notice};
use crate::session::use_session;
use crate::store::{store_settle_vote, use_spell_store};

/// Vote count colour by sign
fn vote_count_class(vote_count: i64) -> &'static str {
    match vote_count {
        n if n > 0 => "vote-count positive",
        n if n < 0 => "vote-count negative",
        _ => "vote-count",
    }
}

/// Owners can't vote on their own spells; one vote request at a time
pub(crate) fn vote_disabled(authenticated: bool, is_owner: bool, in_flight: bool) -> bool {
    !authenticated || is_owner || in_flight
}

#[component]
pub fn SpellCard(
    spell: Spell,
    #[prop(into)] on_open: Callback<u32>,
) -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let store = use_spell_store();

    let (is_voting, set_is_voting) = signal(false);

    let id = spell.id;
    let owner_id = spell.user_id;
    let user_vote = spell.user_vote;

    let is_owner = move || session.viewer_id() == Some(owner_id);
    let is_disabled = move || vote_disabled(session.is_authenticated(), is_owner(), is_voting.get());

    let cast_vote = move |vote_type: VoteType| {
        if is_disabled() {
            return;
        }
        set_is_voting.set(true);
        let client = session.client();
        log::debug!("[SPELLS] Casting {} on spell {}", vote_type.as_str(), id);

        spawn_local(async move {
            let outcome = api::vote_spell(&client, id, vote_type).await;
            set_is_voting.set(false);
            store_settle_vote(&store, &outcome);
            match &outcome {
                Ok(_) => toaster.notify(Notice::vote_recorded()),
                Err(err) => toaster.notify(Notice::vote_failed(err)),
            }
        });
    };

    let vote_btn_class = move |direction: VoteType| {
        let mut class = String::from(match direction {
            VoteType::Upvote => "vote-btn up",
            VoteType::Downvote => "vote-btn down",
        });
        if user_vote == Some(direction) {
            class.push_str(" active");
        }
        if is_owner() {
            class.push_str(" owner");
        }
        class
    };

    view! {
        <article class="spell-card" on:click=move |_| on_open.run(id)>
            <header class="spell-card-header">
                <div class="spell-card-title">
                    <h3>{spell.name.clone()}</h3>
                    <span class=element_class(&spell.element)>{element_label(&spell.element)}</span>
                </div>

                <div class="vote-section">
                    <button
                        class=move || vote_btn_class(VoteType::Upvote)
                        title="Upvote"
                        disabled=is_disabled
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cast_vote(VoteType::Upvote);
                        }
                    >
                        "▲"
                    </button>
                    <span class=vote_count_class(spell.vote_count)>{spell.vote_count}</span>
                    <button
                        class=move || vote_btn_class(VoteType::Downvote)
                        title="Downvote"
                        disabled=is_disabled
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cast_vote(VoteType::Downvote);
                        }
                    >
                        "▼"
                    </button>
                </div>
            </header>

            <p class="spell-card-description">{spell.description.clone()}</p>

            <footer class="spell-card-footer">
                <span>{format!("Mana {}", spell.mana_cost)}</span>
                <span>{format!("Damage {}", spell.damage_or_zero())}</span>
                <span>{format!("Spell #{}", id)}</span>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::anonymous(false, false, false, true)]
    #[case::owner(true, true, false, true)]
    #[case::in_flight(true, false, true, true)]
    #[case::other_viewer(true, false, false, false)]
    fn test_vote_disabled(
        #[case] authenticated: bool,
        #[case] is_owner: bool,
        #[case] in_flight: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(vote_disabled(authenticated, is_owner, in_flight), expected);
    }

    #[test]
    fn test_vote_count_class() {
        assert_eq!(vote_count_class(5), "vote-count positive");
        assert_eq!(vote_count_class(-2), "vote-count negative");
        assert_eq!(vote_count_class(0), "vote-count");
    }
}
