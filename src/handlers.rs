//! Character CRUD handlers: create, list, get, update, delete.
//!
//! Each handler is extract -> store call -> serialize. Entity payloads
//! are bare JSON objects/arrays (no envelope), matching the original
//! wire format of this API.

use crate::character::{Character, CharacterInput};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

/// All id-bearing routes share one policy: the segment must parse as a
/// positive integer, otherwise 400.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    let id: i64 = id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))?;
    if id <= 0 {
        return Err(AppError::BadRequest("id must be positive".into()));
    }
    Ok(id)
}

/// Deserialize the nine required fields; a missing or mistyped field
/// fails with a message naming it.
fn parse_input(body: Value) -> Result<CharacterInput, AppError> {
    let input: CharacterInput =
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;
    input.validate()?;
    Ok(input)
}

pub async fn create_character(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Character>, AppError> {
    let input = parse_input(body)?;
    let created = state.store.create(&input).await?;
    Ok(Json(created))
}

pub async fn all_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, AppError> {
    let characters = state.store.list_all().await?;
    Ok(Json(characters))
}

pub async fn get_character(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Character>, AppError> {
    let id = parse_id(&id_str)?;
    let character = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(character))
}

pub async fn update_character(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Character>, AppError> {
    let id = parse_id(&id_str)?;
    let input = parse_input(body)?;
    let updated = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(updated))
}

pub async fn delete_character(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Character>, AppError> {
    let id = parse_id(&id_str)?;
    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(Json(deleted))
}
