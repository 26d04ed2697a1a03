use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Repositories,
    dto::team::{CreateTeamRequest, TeamDetailResponse, TeamResponse},
};
use validator::Validate;

use crate::error::{ApiResult, parse_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/teams",
    params(
        ("league_id" = String, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "Teams of the league sorted by name", body = Vec<TeamResponse>),
        (status = 400, description = "Invalid ID format")
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
) -> ApiResult<Json<Vec<TeamResponse>>> {
    let league_id = parse_id(&league_id)?;

    let teams = services::list_teams(&repos, league_id).await?;

    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/teams",
    params(
        ("league_id" = String, Path, description = "League ID")
    ),
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team added to the league", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "League not found")
    ),
    tag = "teams"
)]
pub async fn add_team(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let league_id = parse_id(&league_id)?;
    let Json(req) = payload?;
    req.validate()?;

    let team = services::add_team(&repos, league_id, &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/teams/{team_id}",
    params(
        ("league_id" = String, Path, description = "League ID"),
        ("team_id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team with up to 10 upcoming fixtures and 10 recent results", body = TeamDetailResponse),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(repos): State<Repositories>,
    Path((league_id, team_id)): Path<(String, String)>,
) -> ApiResult<Json<TeamDetailResponse>> {
    let league_id = parse_id(&league_id)?;
    let team_id = parse_id(&team_id)?;

    let detail = services::team_detail(&repos, league_id, team_id).await?;

    Ok(Json(detail))
}
