//! Spell List Engine
//!
//! Canonical spell collection plus a derived, filtered and sorted view.
//! Every patch returns a new collection and is applied only after the
//! server has confirmed the mutation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::error::ApiError;
use crate::models::{Spell, VoteType};

pub const ALL_ELEMENTS: &str = "all";

/// Sort order for the spell view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest id first; ids stand in for creation time
    #[default]
    Newest,
    Oldest,
    MostVoted,
    LeastVoted,
    Alphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::MostVoted,
        SortKey::LeastVoted,
        SortKey::Alphabetical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::MostVoted => "most_voted",
            SortKey::LeastVoted => "least_voted",
            SortKey::Alphabetical => "alphabetical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::MostVoted => "Most Voted",
            SortKey::LeastVoted => "Least Voted",
            SortKey::Alphabetical => "Alphabetical",
        }
    }

    /// Unknown keys fall back to `Newest`
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    fn compare(&self, a: &Spell, b: &Spell) -> Ordering {
        match self {
            SortKey::Newest => b.id.cmp(&a.id),
            SortKey::Oldest => a.id.cmp(&b.id),
            SortKey::MostVoted => b.vote_count.cmp(&a.vote_count),
            SortKey::LeastVoted => a.vote_count.cmp(&b.vote_count),
            SortKey::Alphabetical => compare_names(&a.name, &b.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

thread_local! {
    /// Root-locale collation: accents sort with their base letter, lowercase first
    static NAME_COLLATOR: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default())
            .map_err(|e| log::error!("[SPELLS] Collation data unavailable: {}", e))
            .ok();
}

fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
    })
}

/// Filter and sort inputs for the view
#[derive(Debug, Clone, PartialEq)]
pub struct ListCriteria {
    pub search: String,
    /// "all" or an element tag, compared case-insensitively
    pub element: String,
    pub sort: SortKey,
    /// Only honored while someone is signed in
    pub mine_only: bool,
}

impl Default for ListCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            element: ALL_ELEMENTS.to_string(),
            sort: SortKey::default(),
            mine_only: false,
        }
    }
}

impl ListCriteria {
    /// Whether search or element narrowing is active
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || !self.element.eq_ignore_ascii_case(ALL_ELEMENTS)
    }
}

pub fn matches_search(spell: &Spell, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    spell.name.to_lowercase().contains(&term) || spell.description.to_lowercase().contains(&term)
}

fn matches_element(spell: &Spell, element: &str) -> bool {
    element.eq_ignore_ascii_case(ALL_ELEMENTS) || spell.element.to_lowercase() == element.to_lowercase()
}

/// Derive the displayed view; never touches `spells`
pub fn derive_view(spells: &[Spell], criteria: &ListCriteria, viewer_id: Option<u32>) -> Vec<Spell> {
    let owner = if criteria.mine_only { viewer_id } else { None };

    let mut view: Vec<Spell> = spells
        .iter()
        .filter(|spell| matches_search(spell, &criteria.search))
        .filter(|spell| matches_element(spell, &criteria.element))
        .filter(|spell| owner.map_or(true, |id| spell.user_id == id))
        .cloned()
        .collect();

    // Stable: ties keep fetch order
    view.sort_by(|a, b| criteria.sort.compare(a, b));
    view
}

/// Distinct element tags in first-seen order, for the filter dropdown
pub fn unique_elements(spells: &[Spell]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for spell in spells {
        if !seen.iter().any(|e| e.eq_ignore_ascii_case(&spell.element)) {
            seen.push(spell.element.clone());
        }
    }
    seen
}

// ========================
// Confirmed patches
// ========================

/// Take the server's vote_count and user_vote for one spell
pub fn apply_vote_result(spells: &[Spell], id: u32, vote_count: i64, user_vote: Option<VoteType>) -> Vec<Spell> {
    spells
        .iter()
        .map(|spell| {
            if spell.id == id {
                Spell {
                    vote_count,
                    user_vote,
                    ..spell.clone()
                }
            } else {
                spell.clone()
            }
        })
        .collect()
}

/// Replace a spell wholesale with the server's representation
pub fn apply_update(spells: &[Spell], updated: &Spell) -> Vec<Spell> {
    spells
        .iter()
        .map(|spell| if spell.id == updated.id { updated.clone() } else { spell.clone() })
        .collect()
}

/// Remove a spell; missing ids are a no-op
pub fn apply_delete(spells: &[Spell], id: u32) -> Vec<Spell> {
    spells.iter().filter(|spell| spell.id != id).cloned().collect()
}

/// Append a newly created spell, replacing any cached copy with the same id
pub fn apply_create(spells: &[Spell], created: &Spell) -> Vec<Spell> {
    let mut next = apply_delete(spells, created.id);
    next.push(created.clone());
    next
}

/// Drop every viewer-specific vote, used when the viewer changes
pub fn clear_viewer_votes(spells: &[Spell]) -> Vec<Spell> {
    spells
        .iter()
        .map(|spell| Spell {
            user_vote: None,
            ..spell.clone()
        })
        .collect()
}

/// Patch after a vote call; `None` leaves the collection untouched
pub fn settle_vote(spells: &[Spell], outcome: &Result<Spell, ApiError>) -> Option<Vec<Spell>> {
    match outcome {
        Ok(updated) => Some(apply_vote_result(spells, updated.id, updated.vote_count, updated.user_vote)),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn make_spell(id: u32, name: &str, description: &str, element: &str, vote_count: i64) -> Spell {
        Spell {
            id,
            name: name.to_string(),
            description: description.to_string(),
            mana_cost: 10,
            damage: None,
            element: element.to_string(),
            user_id: id % 2,
            vote_count,
            user_vote: None,
        }
    }

    fn sample() -> Vec<Spell> {
        vec![
            make_spell(4, "Fireball", "A ball of flame", "fire", 3),
            make_spell(1, "Tidal Wave", "Summons a wave", "Water", -1),
            make_spell(3, "ember shield", "Wards against FIRE damage", "defense", 3),
            make_spell(2, "Gust", "A sharp wind", "air", 0),
        ]
    }

    fn ids(spells: &[Spell]) -> Vec<u32> {
        spells.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        let spells = sample();
        let criteria = ListCriteria {
            search: "fIrE".to_string(),
            ..Default::default()
        };
        let view = derive_view(&spells, &criteria, None);
        assert_eq!(ids(&view), vec![4, 3]);

        for spell in &spells {
            let included = view.iter().any(|s| s.id == spell.id);
            let lower = "fire";
            let hit = spell.name.to_lowercase().contains(lower) || spell.description.to_lowercase().contains(lower);
            assert_eq!(included, hit, "spell {}", spell.id);
        }
    }

    #[test]
    fn test_element_filter_is_case_insensitive() {
        let criteria = ListCriteria {
            element: "water".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&sample(), &criteria, None)), vec![1]);

        let criteria = ListCriteria {
            element: "ALL".to_string(),
            ..Default::default()
        };
        assert_eq!(derive_view(&sample(), &criteria, None).len(), 4);
    }

    #[test]
    fn test_mine_only_requires_viewer() {
        let criteria = ListCriteria {
            mine_only: true,
            ..Default::default()
        };
        // user_id is id % 2
        assert_eq!(ids(&derive_view(&sample(), &criteria, Some(0))), vec![4, 2]);
        assert_eq!(derive_view(&sample(), &criteria, None).len(), 4);
    }

    #[rstest]
    #[case(SortKey::Newest, vec![4, 3, 2, 1])]
    #[case(SortKey::Oldest, vec![1, 2, 3, 4])]
    #[case(SortKey::MostVoted, vec![4, 3, 2, 1])]
    #[case(SortKey::LeastVoted, vec![1, 2, 4, 3])]
    #[case(SortKey::Alphabetical, vec![3, 4, 2, 1])]
    fn test_sort_keys(#[case] sort: SortKey, #[case] expected: Vec<u32>) {
        let criteria = ListCriteria { sort, ..Default::default() };
        let first = derive_view(&sample(), &criteria, None);
        assert_eq!(ids(&first), expected);

        // Same inputs, same order
        let second = derive_view(&sample(), &criteria, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_most_voted_is_stable_for_ties() {
        let spells = vec![
            make_spell(1, "a", "d", "fire", -1),
            make_spell(2, "b", "d", "fire", 5),
            make_spell(3, "c", "d", "fire", 5),
        ];
        let criteria = ListCriteria {
            sort: SortKey::MostVoted,
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&spells, &criteria, None)), vec![2, 3, 1]);
    }

    #[test]
    fn test_alphabetical_collates_accents_and_case() {
        let spells = vec![
            make_spell(1, "Zephyr", "d", "air", 0),
            make_spell(2, "Éclair", "d", "light", 0),
            make_spell(3, "apple", "d", "earth", 0),
            make_spell(4, "Apple", "d", "earth", 0),
        ];
        let criteria = ListCriteria {
            sort: SortKey::Alphabetical,
            ..Default::default()
        };
        let names: Vec<String> = derive_view(&spells, &criteria, None)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["apple", "Apple", "Éclair", "Zephyr"]);
    }

    #[test]
    fn test_derive_view_leaves_canonical_untouched() {
        let spells = sample();
        let before = spells.clone();
        let criteria = ListCriteria {
            search: "a".into(),
            sort: SortKey::Alphabetical,
            ..Default::default()
        };
        let _ = derive_view(&spells, &criteria, None);
        assert_eq!(spells, before);
    }

    #[test]
    fn test_apply_vote_result_touches_only_target() {
        let mut spells = sample();
        spells.push(make_spell(7, "Shadow Bolt", "Dark energy", "dark", 1));
        let before = spells.clone();

        let after = apply_vote_result(&spells, 7, 4, Some(VoteType::Upvote));

        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == 7 {
                assert_eq!(new.vote_count, 4);
                assert_eq!(new.user_vote, Some(VoteType::Upvote));
                assert_eq!(
                    Spell { vote_count: old.vote_count, user_vote: old.user_vote, ..new.clone() },
                    *old
                );
            } else {
                assert_eq!(new, old);
            }
        }
        assert_eq!(spells, before);
    }

    #[test]
    fn test_apply_delete() {
        let mut spells = sample();
        spells.push(make_spell(7, "Shadow Bolt", "Dark energy", "dark", 1));

        let removed = apply_delete(&spells, 7);
        assert_eq!(removed.len(), spells.len() - 1);
        assert!(removed.iter().all(|s| s.id != 7));

        let untouched = apply_delete(&removed, 7);
        assert_eq!(untouched, removed);
    }

    #[test]
    fn test_apply_update_and_create() {
        let spells = sample();
        let mut edited = spells[1].clone();
        edited.name = "Tsunami".into();
        edited.damage = Some(40);

        let updated = apply_update(&spells, &edited);
        assert_eq!(updated[1], edited);
        assert_eq!(ids(&updated), ids(&spells));

        let created = make_spell(9, "Quake", "Shakes the ground", "earth", 0);
        let grown = apply_create(&spells, &created);
        assert_eq!(ids(&grown), vec![4, 1, 3, 2, 9]);
    }

    #[test]
    fn test_settle_vote_failure_leaves_collection() {
        let spells = sample();
        assert!(settle_vote(&spells, &Err(ApiError::from_status(403, ""))).is_none());
        assert!(settle_vote(&spells, &Err(ApiError::from_status(500, ""))).is_none());

        let mut voted = spells[0].clone();
        voted.vote_count = 10;
        voted.user_vote = Some(VoteType::Downvote);
        voted.name = "ignored".into();
        let patched = settle_vote(&spells, &Ok(voted)).unwrap();
        assert_eq!(patched[0].vote_count, 10);
        assert_eq!(patched[0].name, "Fireball");
    }

    #[test]
    fn test_clear_viewer_votes() {
        let mut spells = sample();
        spells[0].user_vote = Some(VoteType::Upvote);
        let cleared = clear_viewer_votes(&spells);
        assert!(cleared.iter().all(|s| s.user_vote.is_none()));
        assert_eq!(cleared[0].vote_count, 3);
    }

    #[test]
    fn test_unique_elements_and_sort_key_parsing() {
        let mut spells = sample();
        spells.push(make_spell(5, "Inferno", "More flame", "Fire", 0));
        assert_eq!(unique_elements(&spells), vec!["fire", "Water", "defense", "air"]);

        assert_eq!(SortKey::parse_or_default("most_voted"), SortKey::MostVoted);
        assert_eq!(SortKey::parse_or_default("bogus"), SortKey::Newest);
        assert_eq!(SortKey::LeastVoted.to_string(), "least_voted");
    }
}
