use axum::{Router, routing::get};
use storage::Repositories;

use super::handlers::get_standings;

pub fn routes() -> Router<Repositories> {
    Router::new().route("/leagues/:league_id/standings", get(get_standings))
}
