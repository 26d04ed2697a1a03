use axum::{
    Router, middleware,
    routing::{get, patch},
};
use storage::Repositories;

use super::handlers::{recent_results, upcoming_matches, update_match};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Repositories> {
    let protected = Router::new()
        .route("/matches/:match_id", patch(update_match))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/leagues/:league_id/matches/upcoming", get(upcoming_matches))
        .route("/leagues/:league_id/matches/results", get(recent_results))
        .merge(protected)
}
