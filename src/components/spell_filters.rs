//! Spell Filters Component
//!
//! Search, element, sort and "My Spells" controls above the grid.

use leptos::prelude::*;

use crate::components::element_selector::element_label;
use crate::session::use_session;
use crate::spell_list::{unique_elements, SortKey, ALL_ELEMENTS};
use crate::store::{store_update_criteria, use_spell_store, SpellStateStoreFields};

/// "My Spells" only makes sense with a viewer to match against
pub(crate) fn shows_mine_toggle(authenticated: bool) -> bool {
    authenticated
}

#[component]
pub fn SpellFilters() -> impl IntoView {
    let store = use_spell_store();
    let session = use_session();

    let elements = Memo::new(move |_| unique_elements(&store.spells().read()));
    let criteria = move || store.criteria().get();

    view! {
        <div class="spell-filters">
            <input
                type="search"
                class="filter-search"
                placeholder="Search spells..."
                prop:value=move || criteria().search
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    store_update_criteria(&store, |c| c.search = term);
                }
            />

            <select
                class="filter-element"
                prop:value=move || criteria().element
                on:change=move |ev| {
                    let element = event_target_value(&ev);
                    store_update_criteria(&store, |c| c.element = element);
                }
            >
                <option value=ALL_ELEMENTS>"All Elements"</option>
                <For
                    each=move || elements.get()
                    key=|element| element.clone()
                    children=move |element| {
                        let label = element_label(&element);
                        view! { <option value=element>{label}</option> }
                    }
                />
            </select>

            <select
                class="filter-sort"
                prop:value=move || criteria().sort.as_str()
                on:change=move |ev| {
                    let sort = SortKey::parse_or_default(&event_target_value(&ev));
                    store_update_criteria(&store, |c| c.sort = sort);
                }
            >
                {SortKey::ALL.into_iter().map(|key| view! {
                    <option value=key.as_str()>{key.label()}</option>
                }).collect_view()}
            </select>

            <Show when=move || shows_mine_toggle(session.is_authenticated())>
                <button
                    class=move || if criteria().mine_only { "filter-mine active" } else { "filter-mine" }
                    on:click=move |_| store_update_criteria(&store, |c| c.mine_only = !c.mine_only)
                >
                    "My Spells"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mine_toggle_hidden_for_anonymous() {
        assert!(!shows_mine_toggle(false));
        assert!(shows_mine_toggle(true));
    }
}
