use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Repositories,
    dto::roster::{EnforceRosterResponse, SeedLeagueResponse},
};

use crate::error::{ApiResult, parse_id};

use super::services;

#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/enforce-teams",
    params(
        ("league_id" = String, Path, description = "League ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Teams outside the canonical list deleted and missing ones created", body = EnforceRosterResponse),
        (status = 400, description = "Invalid ID format"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "League not found")
    ),
    tag = "roster"
)]
pub async fn enforce_teams(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
) -> ApiResult<Json<EnforceRosterResponse>> {
    let league_id = parse_id(&league_id)?;

    let outcome = services::enforce_teams(&repos, league_id).await?;

    Ok(Json(EnforceRosterResponse::from(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/seed/maltese-youth-league",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Maltese Youth League exists with exactly the canonical clubs", body = SeedLeagueResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "roster"
)]
pub async fn seed_maltese_league(State(repos): State<Repositories>) -> ApiResult<Json<SeedLeagueResponse>> {
    let league = services::seed_league(&repos).await?;

    Ok(Json(SeedLeagueResponse::new(league.league_id)))
}
