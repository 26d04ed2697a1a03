use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::roster::{CANONICAL_ROSTER, RosterOutcome};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnforceRosterResponse {
    pub deleted_non_allowed: u64,
    pub created_missing: u64,
    pub allowed: Vec<String>,
}

impl From<RosterOutcome> for EnforceRosterResponse {
    fn from(outcome: RosterOutcome) -> Self {
        Self {
            deleted_non_allowed: outcome.deleted,
            created_missing: outcome.created,
            allowed: canonical_names(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedLeagueResponse {
    pub league_id: Uuid,
    pub teams: Vec<String>,
}

impl SeedLeagueResponse {
    pub fn new(league_id: Uuid) -> Self {
        Self {
            league_id,
            teams: canonical_names(),
        }
    }
}

fn canonical_names() -> Vec<String> {
    CANONICAL_ROSTER.iter().map(|name| name.to_string()).collect()
}
