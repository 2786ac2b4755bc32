//! Router assembly: character CRUD routes plus health/version, with a
//! body-size limit and request tracing on the whole app.

use crate::config::MAX_BODY_BYTES;
use crate::handlers::{
    all_characters, create_character, delete_character, get_character, update_character,
};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthBody>, (axum::http::StatusCode, Json<HealthBody>)> {
    if state.store.list_all().await.is_err() {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(HealthBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// The five CRUD routes. Paths are preserved exactly for compatibility.
pub fn character_routes(state: AppState) -> Router {
    Router::new()
        .route("/create_character", post(create_character))
        .route("/all_characters", get(all_characters))
        .route("/get_character/:id", get(get_character))
        .route("/update_character/:id", put(update_character))
        .route("/delete_character/:id", delete(delete_character))
        .with_state(state)
}

/// GET /health (with a DB check), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(state)
}

/// The complete application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(character_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
