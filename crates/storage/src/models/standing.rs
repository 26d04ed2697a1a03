use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One team's line in a league table. Derived from played matches and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingRow {
    pub team_id: Uuid,
    pub team_name: String,
    #[serde(rename = "P")]
    pub played: u32,
    #[serde(rename = "W")]
    pub won: u32,
    #[serde(rename = "D")]
    pub drawn: u32,
    #[serde(rename = "L")]
    pub lost: u32,
    #[serde(rename = "F")]
    pub goals_for: u64,
    #[serde(rename = "A")]
    pub goals_against: u64,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
    #[serde(rename = "Pts")]
    pub points: u32,
    /// 1-based rank, assigned once the table is sorted
    pub position: u32,
}

impl StandingRow {
    pub fn new(team_id: Uuid, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            position: 0,
        }
    }
}
