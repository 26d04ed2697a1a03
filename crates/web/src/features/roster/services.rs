use storage::{
    Repositories,
    error::Result,
    models::League,
    services::roster::{self, CANONICAL_ROSTER, RosterOutcome},
};
use uuid::Uuid;

/// Reconcile a league's teams with the canonical club list
pub async fn enforce_teams(repos: &Repositories, league_id: Uuid) -> Result<RosterOutcome> {
    roster::enforce_roster(repos, league_id, &CANONICAL_ROSTER).await
}

/// Find or create the Maltese Youth League with its canonical clubs
pub async fn seed_league(repos: &Repositories) -> Result<League> {
    let (league, outcome) = roster::seed_canonical_league(repos).await?;
    tracing::info!(
        league_id = %league.league_id,
        deleted = outcome.deleted,
        created = outcome.created,
        "Seeded canonical league"
    );
    Ok(league)
}
