//! Keeps a league's roster equal to a fixed list of clubs.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{DEFAULT_COUNTRY, League};
use crate::repository::Repositories;

/// Clubs allowed in the Maltese Youth League, in display order.
pub const CANONICAL_ROSTER: [&str; 10] = [
    "HIBS",
    "BIRKIRKARA",
    "BALZAN",
    "ZABBAR",
    "NAXXAR",
    "QORMI",
    "MARSASKALA",
    "KIRKOP",
    "GOZO",
    "MELLIEHA",
];

pub const SEED_LEAGUE_NAME: &str = "Maltese Youth League";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterOutcome {
    pub deleted: u64,
    pub created: u64,
}

/// Deletes every team whose name is not in `allowed` (exact, case-sensitive),
/// then creates the allowed names that are missing, with `short_name = name`.
/// Deletion runs first so a club can be replaced by its canonical spelling.
pub async fn enforce_roster(
    repos: &Repositories,
    league_id: Uuid,
    allowed: &[&str],
) -> Result<RosterOutcome> {
    repos.leagues.find_by_id(league_id).await?;

    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();
    let teams = repos.teams.list_by_league(league_id).await?;

    let to_delete: Vec<Uuid> = teams
        .iter()
        .filter(|t| !allowed_set.contains(t.name.as_str()))
        .map(|t| t.team_id)
        .collect();

    let deleted = if to_delete.is_empty() {
        0
    } else {
        repos.teams.delete_many(&to_delete).await?
    };

    let mut present: HashSet<String> = teams
        .into_iter()
        .filter(|t| allowed_set.contains(t.name.as_str()))
        .map(|t| t.name)
        .collect();

    let mut created = 0u64;
    for &name in allowed {
        if present.contains(name) {
            continue;
        }
        match repos.teams.create(league_id, name, Some(name)).await {
            Ok(_) => {
                present.insert(name.to_string());
                created += 1;
            }
            Err(e) => tracing::warn!(%league_id, team = %name, "Failed to create roster team: {}", e),
        }
    }

    tracing::info!(%league_id, deleted, created, "Roster enforced");

    Ok(RosterOutcome { deleted, created })
}

/// Finds or creates the Maltese Youth League and enforces its roster.
pub async fn seed_canonical_league(repos: &Repositories) -> Result<(League, RosterOutcome)> {
    let league = match repos.leagues.find_by_name(SEED_LEAGUE_NAME).await? {
        Some(league) => league,
        None => {
            tracing::info!("Creating {}", SEED_LEAGUE_NAME);
            repos
                .leagues
                .create(SEED_LEAGUE_NAME, None, DEFAULT_COUNTRY)
                .await?
        }
    };

    let outcome = enforce_roster(repos, league.league_id, &CANONICAL_ROSTER).await?;

    Ok((league, outcome))
}
