use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::League;

/// Request payload for creating a new league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLeagueRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 64))]
    pub season: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueResponse {
    pub id: Uuid,
    pub name: String,
    pub season: Option<String>,
    pub country: String,
    pub created_at: NaiveDateTime,
}

impl From<League> for LeagueResponse {
    fn from(league: League) -> Self {
        Self {
            id: league.league_id,
            name: league.name,
            season: league.season,
            country: league.country,
            created_at: league.created_at,
        }
    }
}
