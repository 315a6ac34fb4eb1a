//! Spell Endpoints
//!
//! CRUD and voting on spells.

use super::{encode_err, ApiClient};
use crate::error::ApiError;
use crate::models::{Spell, SpellFormData, VoteRequest, VoteType};

/// GET /spells, anonymous or authenticated depending on the client
pub async fn list_spells(client: &ApiClient) -> Result<Vec<Spell>, ApiError> {
    let request = client.get("/spells").build().map_err(encode_err)?;
    client.fetch_json(request).await
}

pub async fn create_spell(client: &ApiClient, data: &SpellFormData) -> Result<Spell, ApiError> {
    let request = client.post("/spells").json(data).map_err(encode_err)?;
    client.fetch_json(request).await
}

pub async fn update_spell(client: &ApiClient, id: u32, data: &SpellFormData) -> Result<Spell, ApiError> {
    let request = client.put(&format!("/spells/{}", id)).json(data).map_err(encode_err)?;
    client.fetch_json(request).await
}

pub async fn delete_spell(client: &ApiClient, id: u32) -> Result<(), ApiError> {
    let request = client.delete(&format!("/spells/{}", id)).build().map_err(encode_err)?;
    client.fetch_empty(request).await
}

/// Returns the spell with the server's fresh vote_count and user_vote
pub async fn vote_spell(client: &ApiClient, id: u32, vote_type: VoteType) -> Result<Spell, ApiError> {
    let request = client
        .post(&format!("/spells/{}/vote", id))
        .json(&VoteRequest { vote_type })
        .map_err(encode_err)?;
    client.fetch_json(request).await
}
