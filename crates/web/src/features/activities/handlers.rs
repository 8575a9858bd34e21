use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::activity::{ActivityFilter, ActivityResponse, CreateActivityRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/activities",
    params(ActivityFilter),
    responses(
        (status = 200, description = "Activities, most recent first", body = Vec<ActivityResponse>)
    ),
    tag = "activities"
)]
pub async fn list_activities(
    State(db): State<Database>,
    Query(filter): Query<ActivityFilter>,
) -> Result<Response, WebError> {
    let activities = services::list_activities(db.pool(), &filter).await?;

    let response: Vec<ActivityResponse> =
        activities.into_iter().map(ActivityResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/activities",
    request_body = CreateActivityRequest,
    responses(
        (status = 201, description = "Activity logged and leaderboard rebuilt", body = ActivityResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "activities"
)]
pub async fn create_activity(
    State(db): State<Database>,
    Json(req): Json<CreateActivityRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let activity = services::create_activity(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ActivityResponse::from(activity))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/activities/{id}",
    params(
        ("id" = Uuid, Path, description = "Activity id")
    ),
    responses(
        (status = 204, description = "Activity deleted and leaderboard rebuilt"),
        (status = 404, description = "Activity not found")
    ),
    tag = "activities"
)]
pub async fn delete_activity(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_activity(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
