use std::path::Path;

use async_trait::async_trait;
use storage::{
    dto::fixture::ImportSummary,
    services::fixture_import::{decode_upload, import_fixtures, read_fixture_rows},
};

use crate::{ImportContext, LeagueImporter, Result, validator::FixtureValidator};

/// Loads a fixture CSV from disk into one league.
#[derive(Debug, Default)]
pub struct CsvFixtureImporter {
    dry_run: bool,
}

impl CsvFixtureImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and report only, nothing is written.
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

#[async_trait]
impl LeagueImporter for CsvFixtureImporter {
    async fn import(&self, identifier: &str, context: &ImportContext) -> Result<ImportSummary> {
        let path = Path::new(identifier);
        let bytes = tokio::fs::read(path).await?;
        tracing::info!("Loaded {} bytes from {}", bytes.len(), path.display());

        let league = context.repos.leagues.find_by_id(context.league_id).await?;
        let text = decode_upload(&bytes);
        let rows = read_fixture_rows(&text);
        let teams = context.repos.teams.list_by_league(league.league_id).await?;

        let report = FixtureValidator::validate(&rows, &teams)?;
        report.log_warnings();
        tracing::info!(
            "{} of {} fixture(s) resolvable for league '{}'",
            report.resolvable,
            rows.len(),
            league.name
        );

        if self.dry_run {
            return Ok(ImportSummary { inserted: 0 });
        }

        let summary = import_fixtures(&context.repos, league.league_id, &text).await?;
        Ok(summary)
    }
}
