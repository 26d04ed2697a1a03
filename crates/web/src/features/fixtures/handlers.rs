use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use storage::{Repositories, dto::fixture::ImportSummary};
use utoipa::ToSchema;

use crate::error::{ApiResult, WebError, parse_id};

use super::services;

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct FixtureUpload {
    /// CSV with columns home_team, away_team, match_date, venue
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/fixtures/upload",
    params(
        ("league_id" = String, Path, description = "League ID")
    ),
    request_body(content = FixtureUpload, content_type = "multipart/form-data"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Number of fixtures inserted; rows with unknown teams are skipped", body = ImportSummary),
        (status = 400, description = "Invalid ID or missing file"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "League not found")
    ),
    tag = "fixtures"
)]
pub async fn upload_fixtures(
    State(repos): State<Repositories>,
    Path(league_id): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<Json<ImportSummary>> {
    let league_id = parse_id(&league_id)?;

    let mut contents = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| WebError::BadRequest(format!("Failed to read upload: {}", e)))?;
            contents = Some(bytes);
            break;
        }
    }

    let contents =
        contents.ok_or_else(|| WebError::BadRequest("Missing 'file' field".to_string()))?;

    let summary = services::upload_fixtures(&repos, league_id, &contents).await?;

    Ok(Json(summary))
}
