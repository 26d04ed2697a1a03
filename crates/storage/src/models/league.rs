use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Country assigned to leagues created without one.
pub const DEFAULT_COUNTRY: &str = "Malta";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct League {
    pub league_id: Uuid,
    pub name: String,
    pub season: Option<String>,
    pub country: String,
    pub created_at: chrono::NaiveDateTime,
}
