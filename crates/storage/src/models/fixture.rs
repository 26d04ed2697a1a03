use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of a match. Any state may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Played,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Played => "played",
            Self::Postponed => "postponed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Scheduled and postponed matches are still to be played.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Postponed)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "played" => Ok(Self::Played),
            "postponed" => Ok(Self::Postponed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown match status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    /// ISO-8601 date as supplied by the fixture list; not parsed
    pub match_date: Option<String>,
    pub venue: Option<String>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl Match {
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// A fixture about to be inserted. New matches always start as scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: Option<String>,
    pub venue: Option<String>,
}

/// Partial update of a match result. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchUpdate {
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: Option<MatchStatus>,
}

impl MatchUpdate {
    pub fn is_empty(&self) -> bool {
        self.home_score.is_none() && self.away_score.is_none() && self.status.is_none()
    }

    /// Applies the update to an in-memory copy of the match.
    pub fn apply_to(&self, m: &mut Match) {
        if let Some(score) = self.home_score {
            m.home_score = Some(score);
        }
        if let Some(score) = self.away_score {
            m.away_score = Some(score);
        }
        if let Some(status) = self.status {
            m.status = status;
        }
    }
}
