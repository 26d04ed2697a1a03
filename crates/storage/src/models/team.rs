use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
