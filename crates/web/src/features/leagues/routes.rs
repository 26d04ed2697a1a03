use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Repositories;

use super::handlers::{create_league, list_leagues};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Repositories> {
    let protected = Router::new()
        .route("/leagues", post(create_league))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/leagues", get(list_leagues))
        .merge(protected)
}
