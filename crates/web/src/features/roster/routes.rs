use axum::{Router, middleware, routing::post};
use storage::Repositories;

use super::handlers::{enforce_teams, seed_maltese_league};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Repositories> {
    Router::new()
        .route("/leagues/:league_id/enforce-teams", post(enforce_teams))
        .route("/seed/maltese-youth-league", post(seed_maltese_league))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
