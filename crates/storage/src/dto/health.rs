use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub backend: String,
    pub store: String,
    pub database: String,
    pub connection_status: String,
    pub database_url_configured: bool,
}
