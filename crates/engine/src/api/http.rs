//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use followgraph_domain::{Recommendation, UserId};

use crate::app::App;
use crate::use_cases::{ErrorClass, FollowError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(store_health))
        .route("/api/follows", post(follow).delete(unfollow))
        .route("/api/users/{user_id}/followees", get(list_followees))
        .route("/api/users/{user_id}/followers", get(list_followers))
        .route(
            "/api/users/{user_id}/recommendations",
            get(list_recommendations),
        )
}

// =============================================================================
// Request / Response bodies
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    #[serde(default)]
    pub follower_id: String,
    #[serde(default)]
    pub followee_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct UserIdsResponse {
    pub user_ids: Vec<UserId>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub items: Vec<Recommendation>,
}

// =============================================================================
// Handlers
// =============================================================================

async fn health() -> &'static str {
    "OK"
}

async fn store_health(State(app): State<Arc<App>>) -> Result<&'static str, ApiError> {
    app.use_cases
        .follows
        .health
        .execute()
        .await
        .map_err(|_| ApiError::Unavailable)?;
    Ok("OK")
}

async fn follow(
    State(app): State<Arc<App>>,
    Json(body): Json<FollowRequest>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .follows
        .follow
        .execute(&body.follower_id, &body.followee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn unfollow(
    State(app): State<Arc<App>>,
    Json(body): Json<FollowRequest>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .follows
        .unfollow
        .execute(&body.follower_id, &body.followee_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_followees(
    State(app): State<Arc<App>>,
    Path(user_id): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<Json<UserIdsResponse>, ApiError> {
    let user_ids = app
        .use_cases
        .follows
        .followees
        .execute(&user_id, page.skip, page.limit)
        .await?;
    Ok(Json(UserIdsResponse { user_ids }))
}

async fn list_followers(
    State(app): State<Arc<App>>,
    Path(user_id): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<Json<UserIdsResponse>, ApiError> {
    let user_ids = app
        .use_cases
        .follows
        .followers
        .execute(&user_id, page.skip, page.limit)
        .await?;
    Ok(Json(UserIdsResponse { user_ids }))
}

async fn list_recommendations(
    State(app): State<Arc<App>>,
    Path(user_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let items = app
        .use_cases
        .follows
        .recommendations
        .execute(&user_id, query.limit)
        .await?;
    Ok(Json(RecommendationsResponse { items }))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
    Unavailable,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            // Store details stay in the logs.
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
            ApiError::Unavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "Unavailable").into_response()
            }
        }
    }
}

impl From<FollowError> for ApiError {
    fn from(e: FollowError) -> Self {
        match e.class() {
            ErrorClass::InvalidArgument => ApiError::BadRequest(e.to_string()),
            ErrorClass::NotFound => ApiError::NotFound(e.to_string()),
            ErrorClass::Internal => ApiError::Internal(e.to_string()),
        }
    }
}
