//! The character entity and its request payload.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored character row. Field order here is the wire order:
/// `id` first, then the nine writable attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub character_class: String,
    pub race: String,
    pub strength: i64,
    pub dexterity: i64,
    pub constitution: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub charisma: i64,
}

/// Incoming payload for create and update. Every field is required;
/// a missing or mistyped field fails deserialization naming the field.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterInput {
    pub name: String,
    pub character_class: String,
    pub race: String,
    pub strength: i64,
    pub dexterity: i64,
    pub constitution: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub charisma: i64,
}

impl CharacterInput {
    /// Checks the constraints the storage schema cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        Ok(())
    }
}
