use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Repositories,
    dto::league::{CreateLeagueRequest, LeagueResponse},
};
use validator::Validate;

use crate::error::ApiResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leagues",
    responses(
        (status = 200, description = "All leagues, newest first", body = Vec<LeagueResponse>)
    ),
    tag = "leagues"
)]
pub async fn list_leagues(State(repos): State<Repositories>) -> ApiResult<Json<Vec<LeagueResponse>>> {
    let leagues = services::list_leagues(&repos).await?;

    let response: Vec<LeagueResponse> = leagues.into_iter().map(LeagueResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/leagues",
    request_body = CreateLeagueRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "League created successfully", body = LeagueResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "leagues"
)]
pub async fn create_league(
    State(repos): State<Repositories>,
    payload: Result<Json<CreateLeagueRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let league = services::create_league(&repos, &req).await?;

    Ok((StatusCode::CREATED, Json(LeagueResponse::from(league))).into_response())
}
