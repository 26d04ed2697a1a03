use axum::{
    Json,
    extract::{Path, State},
};
use storage::{Repositories, models::StandingRow, services::standings};

use crate::error::{ApiResult, parse_id};

#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/standings",
    params(
        ("league_id" = String, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "League table computed from played matches", body = Vec<StandingRow>),
        (status = 400, description = "Invalid ID format")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
) -> ApiResult<Json<Vec<StandingRow>>> {
    let league_id = parse_id(&league_id)?;

    let rows = standings::league_standings(&repos, league_id).await?;

    Ok(Json(rows))
}
