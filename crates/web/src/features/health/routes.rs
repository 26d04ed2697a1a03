use axum::{Router, routing::get};
use storage::Repositories;

use super::handlers::{root, store_status};

pub fn routes() -> Router<Repositories> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(store_status))
}
