use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{CreateWorkoutRequest, WorkoutResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "Workout suggestions", body = Vec<WorkoutResponse>)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(db): State<Database>) -> Result<Response, WebError> {
    let workouts = services::list_workouts(db.pool()).await?;

    let response: Vec<WorkoutResponse> = workouts.into_iter().map(WorkoutResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(db.pool(), id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout created successfully", body = WorkoutResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let workout = services::create_workout(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}
