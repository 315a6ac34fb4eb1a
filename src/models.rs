//! Frontend Models
//!
//! Data structures matching the spell API's JSON schemas.

use serde::{Deserialize, Deserializer, Serialize};

/// Direction of a viewer's vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Upvote => "upvote",
            VoteType::Downvote => "downvote",
        }
    }
}

/// Spell data structure (server-owned, cached client-side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub mana_cost: u32,
    #[serde(default)]
    pub damage: Option<u32>,
    pub element: String,
    pub user_id: u32,
    #[serde(default)]
    pub vote_count: i64,
    /// Vote of the signed-in viewer; `None` when anonymous or not voted
    #[serde(default, deserialize_with = "deserialize_user_vote")]
    pub user_vote: Option<VoteType>,
}

impl Spell {
    pub fn damage_or_zero(&self) -> u32 {
        self.damage.unwrap_or(0)
    }
}

/// Accepts "upvote", "downvote", "none", null or absent.
fn deserialize_user_vote<'de, D>(deserializer: D) -> Result<Option<VoteType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("upvote") => Some(VoteType::Upvote),
        Some("downvote") => Some(VoteType::Downvote),
        _ => None,
    })
}

/// Body for creating and updating a spell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellFormData {
    pub name: String,
    pub description: String,
    pub mana_cost: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    pub element: String,
}

impl SpellFormData {
    /// Pre-fill for the edit form; absent damage shows as 0
    pub fn from_spell(spell: &Spell) -> Self {
        Self {
            name: spell.name.clone(),
            description: spell.description.clone(),
            mana_cost: spell.mana_cost,
            damage: Some(spell.damage_or_zero()),
            element: spell.element.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}

/// Current user (GET /users/me)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// POST /token response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_user_vote_variants() {
        let base = r#""id":1,"name":"Fireball","description":"Hurls fire","mana_cost":5,"element":"fire","user_id":2,"vote_count":-3"#;

        let none: Spell = serde_json::from_str(&format!("{{{}}}", base)).unwrap();
        assert_eq!(none.user_vote, None);
        assert_eq!(none.damage, None);
        assert_eq!(none.damage_or_zero(), 0);
        assert_eq!(none.vote_count, -3);

        let null: Spell = serde_json::from_str(&format!(r#"{{{},"user_vote":null}}"#, base)).unwrap();
        assert_eq!(null.user_vote, None);

        let literal_none: Spell = serde_json::from_str(&format!(r#"{{{},"user_vote":"none"}}"#, base)).unwrap();
        assert_eq!(literal_none.user_vote, None);

        let up: Spell = serde_json::from_str(&format!(r#"{{{},"user_vote":"upvote","damage":12}}"#, base)).unwrap();
        assert_eq!(up.user_vote, Some(VoteType::Upvote));
        assert_eq!(up.damage_or_zero(), 12);
    }

    #[test]
    fn test_form_data_omits_absent_damage() {
        let form = SpellFormData {
            name: "Mist".into(),
            description: "A cloud of concealing mist".into(),
            mana_cost: 3,
            damage: None,
            element: "water".into(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("damage").is_none());
        assert_eq!(json["mana_cost"], 3);
    }

    #[test]
    fn test_vote_request_wire_format() {
        let body = serde_json::to_string(&VoteRequest { vote_type: VoteType::Downvote }).unwrap();
        assert_eq!(body, r#"{"vote_type":"downvote"}"#);
    }
}
