use axum::{Router, middleware, routing::post};
use storage::Repositories;

use super::handlers::upload_fixtures;
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Repositories> {
    Router::new()
        .route("/leagues/:league_id/fixtures/upload", post(upload_fixtures))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
