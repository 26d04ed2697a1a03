use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::fixture::MatchSummary;
use crate::models::Team;

/// Request payload for adding a team to a league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 64))]
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.team_id,
            league_id: team.league_id,
            name: team.name,
            short_name: team.short_name,
            created_at: team.created_at,
        }
    }
}

/// Team page: the club plus its next fixtures and latest results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub upcoming: Vec<MatchSummary>,
    pub results: Vec<MatchSummary>,
}
