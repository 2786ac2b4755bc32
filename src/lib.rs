//! Roster: REST service for character records, backed by SQLite.

pub mod character;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use character::{Character, CharacterInput};
pub use config::Config;
pub use error::AppError;
pub use routes::{app, character_routes, common_routes};
pub use state::AppState;
pub use store::CharacterStore;
