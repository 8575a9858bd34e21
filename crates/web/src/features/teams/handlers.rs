use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List all teams with member counts", body = Vec<TeamResponse>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Response, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    let response: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), id).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created successfully", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Team name already taken")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated successfully", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Team name already taken")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateTeamRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_team(db.pool(), id, &update_req).await?;

    Ok(Json(TeamResponse::from(updated)).into_response())
}
