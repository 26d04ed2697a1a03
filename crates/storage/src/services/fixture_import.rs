//! Bulk fixture import from CSV.
//!
//! Expected header: `home_team,away_team,match_date,venue`. Team names are
//! matched case-insensitively against the league roster; rows that cannot be
//! resolved or parsed are dropped and only show up as a lower inserted count.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Deserialize;
use uuid::Uuid;

use crate::dto::fixture::ImportSummary;
use crate::error::Result;
use crate::models::{NewMatch, Team};
use crate::repository::Repositories;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureRow {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub match_date: Option<String>,
    pub venue: Option<String>,
}

/// Decodes an uploaded file as UTF-8, falling back to Latin-1.
pub fn decode_upload(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::debug!("Upload is not valid UTF-8, decoding as Latin-1");
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Parses the CSV body, silently dropping rows that do not deserialize.
pub fn read_fixture_rows(text: &str) -> Vec<FixtureRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<FixtureRow>()
        .filter_map(|row| match row {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::debug!("Skipping malformed fixture row: {}", e);
                None
            }
        })
        .collect()
}

/// Key used to match CSV team names against the roster.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Case-insensitive lookup from team name to identifier.
pub fn team_directory(teams: &[Team]) -> HashMap<String, Uuid> {
    teams
        .iter()
        .map(|t| (normalize_name(&t.name), t.team_id))
        .collect()
}

/// Turns a parsed row into a new fixture, or `None` if either team is unknown.
pub fn resolve_fixture(
    row: &FixtureRow,
    league_id: Uuid,
    directory: &HashMap<String, Uuid>,
) -> Option<NewMatch> {
    let lookup = |name: Option<&String>| {
        name.and_then(|n| directory.get(&normalize_name(n)))
            .copied()
    };

    let home_team_id = lookup(row.home_team.as_ref())?;
    let away_team_id = lookup(row.away_team.as_ref())?;

    Some(NewMatch {
        league_id,
        home_team_id,
        away_team_id,
        match_date: non_empty(row.match_date.as_deref()),
        venue: non_empty(row.venue.as_deref()),
    })
}

/// Imports every resolvable row of `text` into the league as a scheduled match.
pub async fn import_fixtures(
    repos: &Repositories,
    league_id: Uuid,
    text: &str,
) -> Result<ImportSummary> {
    repos.leagues.find_by_id(league_id).await?;

    let teams = repos.teams.list_by_league(league_id).await?;
    let directory = team_directory(&teams);
    let rows = read_fixture_rows(text);

    let mut inserted = 0u64;
    for row in &rows {
        let Some(new_match) = resolve_fixture(row, league_id, &directory) else {
            tracing::debug!(
                home = ?row.home_team,
                away = ?row.away_team,
                "Skipping fixture with unknown team"
            );
            continue;
        };

        match repos.matches.create(&new_match).await {
            Ok(_) => inserted += 1,
            Err(e) => tracing::warn!("Failed to insert fixture: {}", e),
        }
    }

    tracing::info!(
        %league_id,
        rows = rows.len(),
        inserted,
        "Fixture import finished"
    );

    Ok(ImportSummary { inserted })
}

/// Same as [`import_fixtures`] for a raw uploaded file.
pub async fn import_fixture_bytes(
    repos: &Repositories,
    league_id: Uuid,
    bytes: &[u8],
) -> Result<ImportSummary> {
    let text = decode_upload(bytes);
    import_fixtures(repos, league_id, &text).await
}
