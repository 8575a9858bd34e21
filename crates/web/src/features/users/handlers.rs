use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::user::{AssignTeamRequest, CreateUserRequest, UserResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List all users successfully", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
pub async fn list_users(State(db): State<Database>) -> Result<Response, WebError> {
    let users = services::list_users(db.pool()).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let user = services::get_user(db.pool(), id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::create_user(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/team",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    request_body = AssignTeamRequest,
    responses(
        (status = 200, description = "Team assignment updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn assign_team(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::assign_team(db.pool(), id, &req).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}
