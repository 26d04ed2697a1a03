use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use storage::{
    Repositories,
    dto::{
        common::LimitParams,
        fixture::{MatchResponse, ResultEntry, UpcomingMatchEntry, UpdateMatchRequest},
    },
    models::MatchUpdate,
};
use validator::Validate;

use crate::error::{ApiResult, WebError, parse_id};

use super::services;

#[utoipa::path(
    patch,
    path = "/api/matches/{match_id}",
    params(
        ("match_id" = String, Path, description = "Match ID")
    ),
    request_body = UpdateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match updated", body = MatchResponse),
        (status = 400, description = "Invalid ID, negative score, or played without both scores"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn update_match(
    State(repos): State<Repositories>,
    Path(match_id): Path<String>,
    payload: Result<Json<UpdateMatchRequest>, JsonRejection>,
) -> ApiResult<Json<MatchResponse>> {
    let match_id = parse_id(&match_id)?;
    let Json(req) = payload?;
    req.validate()?;

    let updated = services::update_match(&repos, match_id, &MatchUpdate::from(&req)).await?;

    Ok(Json(MatchResponse::from(updated)))
}

#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/matches/upcoming",
    params(
        ("league_id" = String, Path, description = "League ID"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Scheduled and postponed matches by date", body = Vec<UpcomingMatchEntry>),
        (status = 400, description = "Invalid ID or limit")
    ),
    tag = "matches"
)]
pub async fn upcoming_matches(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> ApiResult<Json<Vec<UpcomingMatchEntry>>> {
    let league_id = parse_id(&league_id)?;
    let Query(params) = query?;
    params.validate().map_err(WebError::BadRequest)?;

    let entries = services::upcoming_matches(&repos, league_id, params.limit).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/matches/results",
    params(
        ("league_id" = String, Path, description = "League ID"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Played matches, most recent first", body = Vec<ResultEntry>),
        (status = 400, description = "Invalid ID or limit")
    ),
    tag = "matches"
)]
pub async fn recent_results(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> ApiResult<Json<Vec<ResultEntry>>> {
    let league_id = parse_id(&league_id)?;
    let Query(params) = query?;
    params.validate().map_err(WebError::BadRequest)?;

    let entries = services::recent_results(&repos, league_id, params.limit).await?;

    Ok(Json(entries))
}
