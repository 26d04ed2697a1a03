use std::collections::HashMap;

use storage::{
    Repositories,
    dto::fixture::{ResultEntry, UpcomingMatchEntry},
    error::Result,
    models::{Match, MatchUpdate},
    repository::MatchFilter,
    services::match_update,
};
use uuid::Uuid;

use crate::features::teams::services::team_names;

fn name_of(names: &HashMap<Uuid, String>, team_id: Uuid) -> String {
    names.get(&team_id).cloned().unwrap_or_default()
}

/// Record a score and/or status change
pub async fn update_match(repos: &Repositories, match_id: Uuid, update: &MatchUpdate) -> Result<Match> {
    match_update::update_match(repos, match_id, update).await
}

/// Scheduled and postponed fixtures, earliest first
pub async fn upcoming_matches(
    repos: &Repositories,
    league_id: Uuid,
    limit: u32,
) -> Result<Vec<UpcomingMatchEntry>> {
    let matches = repos
        .matches
        .list_upcoming(&MatchFilter::league(league_id, limit))
        .await?;
    let names = team_names(repos, league_id).await?;

    Ok(matches
        .into_iter()
        .map(|m| UpcomingMatchEntry {
            id: m.match_id,
            home: name_of(&names, m.home_team_id),
            away: name_of(&names, m.away_team_id),
            date: m.match_date,
            venue: m.venue,
            status: m.status,
        })
        .collect())
}

/// Played matches, most recent first
pub async fn recent_results(
    repos: &Repositories,
    league_id: Uuid,
    limit: u32,
) -> Result<Vec<ResultEntry>> {
    let matches = repos
        .matches
        .list_results(&MatchFilter::league(league_id, limit))
        .await?;
    let names = team_names(repos, league_id).await?;

    Ok(matches
        .into_iter()
        .map(|m| ResultEntry {
            id: m.match_id,
            home: name_of(&names, m.home_team_id),
            away: name_of(&names, m.away_team_id),
            score: ResultEntry::format_score(m.home_score, m.away_score),
            date: m.match_date,
        })
        .collect())
}
