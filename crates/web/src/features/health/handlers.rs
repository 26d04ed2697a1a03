use axum::{Json, extract::State};
use storage::{
    Repositories,
    dto::{common::MessageResponse, health::HealthResponse},
};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = MessageResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Football Information API running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Store connectivity report", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn store_status(State(repos): State<Repositories>) -> Json<HealthResponse> {
    let (database, connection_status) = match repos.health.ping().await {
        Ok(()) => ("Connected & Working".to_string(), "Connected"),
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            (format!("Error: {}", e), "Not Connected")
        }
    };

    Json(HealthResponse {
        backend: "Running".to_string(),
        store: repos.health.backend().to_string(),
        database,
        connection_status: connection_status.to_string(),
        database_url_configured: std::env::var("DATABASE_URL").is_ok(),
    })
}
