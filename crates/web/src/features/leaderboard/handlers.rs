use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leaderboard::{CreateLeaderboardEntryRequest, LeaderboardResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Leaderboard in rank order", body = Vec<LeaderboardResponse>)
    ),
    tag = "leaderboard"
)]
pub async fn list_leaderboard(State(db): State<Database>) -> Result<Response, WebError> {
    let entries = services::list_leaderboard(db.pool()).await?;

    let response: Vec<LeaderboardResponse> =
        entries.into_iter().map(LeaderboardResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaderboard",
    request_body = CreateLeaderboardEntryRequest,
    responses(
        (status = 201, description = "Leaderboard entry created", body = LeaderboardResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Entry for this email already exists")
    ),
    tag = "leaderboard"
)]
pub async fn create_entry(
    State(db): State<Database>,
    Json(req): Json<CreateLeaderboardEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::create_entry(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(LeaderboardResponse::from(entry))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaderboard/recompute",
    responses(
        (status = 200, description = "Leaderboard rebuilt from the activity log", body = Vec<LeaderboardResponse>)
    ),
    tag = "leaderboard"
)]
pub async fn recompute_leaderboard(State(db): State<Database>) -> Result<Response, WebError> {
    let entries = services::recompute(db.pool()).await?;

    let response: Vec<LeaderboardResponse> =
        entries.into_iter().map(LeaderboardResponse::from).collect();

    Ok(Json(response).into_response())
}
