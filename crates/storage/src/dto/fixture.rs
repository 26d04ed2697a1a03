use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Match, MatchStatus, MatchUpdate};

/// Partial update of a match; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchRequest {
    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    pub home_score: Option<i32>,

    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    pub away_score: Option<i32>,

    pub status: Option<MatchStatus>,
}

impl From<&UpdateMatchRequest> for MatchUpdate {
    fn from(req: &UpdateMatchRequest) -> Self {
        Self {
            home_score: req.home_score,
            away_score: req.away_score,
            status: req.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: Option<String>,
    pub venue: Option<String>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.match_id,
            league_id: m.league_id,
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            match_date: m.match_date,
            venue: m.venue,
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
            updated_at: m.updated_at,
        }
    }
}

/// Compact match shape used on team pages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchSummary {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub date: Option<String>,
}

impl From<Match> for MatchSummary {
    fn from(m: Match) -> Self {
        Self {
            id: m.match_id,
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            home_score: m.home_score,
            away_score: m.away_score,
            status: m.status,
            date: m.match_date,
        }
    }
}

/// Upcoming fixture with team names resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpcomingMatchEntry {
    pub id: Uuid,
    pub home: String,
    pub away: String,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub status: MatchStatus,
}

/// Played match with team names resolved and the score as "H - A"
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultEntry {
    pub id: Uuid,
    pub home: String,
    pub away: String,
    pub score: String,
    pub date: Option<String>,
}

impl ResultEntry {
    pub fn format_score(home_score: Option<i32>, away_score: Option<i32>) -> String {
        format!("{} - {}", home_score.unwrap_or(0), away_score.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    pub inserted: u64,
}
