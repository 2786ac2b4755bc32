//! Shared application state for all routes.

use crate::store::CharacterStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CharacterStore,
}
