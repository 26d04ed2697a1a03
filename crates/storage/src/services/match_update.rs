use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Match, MatchStatus, MatchUpdate};
use crate::repository::Repositories;

/// Applies a partial score/status update.
///
/// A match may only end up `played` with both scores recorded, either from
/// this update or from earlier ones. Nothing is written when that check fails.
pub async fn update_match(
    repos: &Repositories,
    match_id: Uuid,
    update: &MatchUpdate,
) -> Result<Match> {
    let existing = repos.matches.find_by_id(match_id).await?;
    if update.is_empty() {
        return Ok(existing);
    }

    let mut proposed = existing.clone();
    update.apply_to(&mut proposed);

    if proposed.status == MatchStatus::Played
        && (proposed.home_score.is_none() || proposed.away_score.is_none())
    {
        return Err(StorageError::Validation(
            "a played match needs both home_score and away_score".to_string(),
        ));
    }

    let updated = repos.matches.update(match_id, update).await?;
    tracing::info!(
        %match_id,
        status = %updated.status,
        home_score = ?updated.home_score,
        away_score = ?updated.away_score,
        "Match updated"
    );

    Ok(updated)
}
