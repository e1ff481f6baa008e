//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use roster_domain::Player;
use roster_shared::{CreatePlayerRequest, PlayerQueryParams, UpdatePlayerRequest};

use crate::app::App;
use crate::use_cases::management::ManagementError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Players
// =============================================================================

async fn list_players(
    State(app): State<Arc<App>>,
    query: Result<Query<PlayerQueryParams>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let players = app.use_cases.management.player.list(&params).await?;
    Ok(Json(players))
}

async fn count_players(
    State(app): State<Arc<App>>,
    query: Result<Query<PlayerQueryParams>, QueryRejection>,
) -> Result<Json<usize>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let count = app.use_cases.management.player.count(&params).await?;
    Ok(Json(count))
}

async fn get_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = app.use_cases.management.player.get(&id).await?;
    Ok(Json(player))
}

async fn create_player(
    State(app): State<Arc<App>>,
    body: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let player = app.use_cases.management.player.create(&request).await?;
    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePlayerRequest>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let player = app
        .use_cases
        .management
        .player
        .update(&id, &request)
        .await?;
    Ok(Json(player))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    app.use_cases.management.player.delete(&id).await?;
    Ok(())
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::Validation(_) | ManagementError::InvalidId(_) => {
                ApiError::BadRequest(e.to_string())
            }
            ManagementError::NotFound { .. } => ApiError::NotFound,
            ManagementError::Repo(err) => {
                tracing::error!(error = %err, "Player store failure");
                ApiError::Internal(err.to_string())
            }
        }
    }
}
