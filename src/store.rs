//! Spell List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Patches are the
//! pure functions from `spell_list`; the store only holds the result.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::Spell;
use crate::spell_list::{self, ListCriteria};

/// Canonical spell collection and the criteria for its view
#[derive(Clone, Debug, Default, Store)]
pub struct SpellState {
    /// All spells, in server fetch order
    pub spells: Vec<Spell>,
    /// Search / element / sort / mine-only inputs
    pub criteria: ListCriteria,
    /// First fetch has completed (successfully or not)
    pub loaded: bool,
}

/// Type alias for the store
pub type SpellStore = Store<SpellState>;

/// Get the spell store from context
pub fn use_spell_store() -> SpellStore {
    expect_context::<SpellStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the collection after a fetch
pub fn store_set_spells(store: &SpellStore, spells: Vec<Spell>) {
    *store.spells().write() = spells;
    *store.loaded().write() = true;
}

/// Take the server's vote result for one spell; failures change nothing
pub fn store_settle_vote(store: &SpellStore, outcome: &Result<Spell, ApiError>) {
    let next = spell_list::settle_vote(&store.spells().read_untracked(), outcome);
    if let Some(next) = next {
        *store.spells().write() = next;
    }
}

/// Replace a spell after a confirmed edit
pub fn store_apply_update(store: &SpellStore, updated: &Spell) {
    let next = spell_list::apply_update(&store.spells().read_untracked(), updated);
    *store.spells().write() = next;
}

/// Remove a spell after a confirmed delete
pub fn store_apply_delete(store: &SpellStore, spell_id: u32) {
    let next = spell_list::apply_delete(&store.spells().read_untracked(), spell_id);
    *store.spells().write() = next;
}

/// Add a spell after a confirmed create
pub fn store_apply_create(store: &SpellStore, created: &Spell) {
    let next = spell_list::apply_create(&store.spells().read_untracked(), created);
    *store.spells().write() = next;
}

/// Viewer changed: forget per-viewer votes and the mine-only toggle
pub fn store_reset_viewer(store: &SpellStore) {
    let next = spell_list::clear_viewer_votes(&store.spells().read_untracked());
    *store.spells().write() = next;
    store.criteria().write().mine_only = false;
}

pub fn store_update_criteria(store: &SpellStore, f: impl FnOnce(&mut ListCriteria)) {
    f(&mut store.criteria().write());
}
