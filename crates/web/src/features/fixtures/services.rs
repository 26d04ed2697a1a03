use storage::{
    Repositories, dto::fixture::ImportSummary, error::Result, services::fixture_import,
};
use uuid::Uuid;

/// Import an uploaded fixtures CSV into a league
pub async fn upload_fixtures(repos: &Repositories, league_id: Uuid, contents: &[u8]) -> Result<ImportSummary> {
    fixture_import::import_fixture_bytes(repos, league_id, contents).await
}
