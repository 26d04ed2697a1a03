use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Repositories;

use super::handlers::{add_team, get_team, list_teams};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Repositories> {
    let protected = Router::new()
        .route("/leagues/:league_id/teams", post(add_team))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/leagues/:league_id/teams", get(list_teams))
        .route("/leagues/:league_id/teams/:team_id", get(get_team))
        .merge(protected)
}
