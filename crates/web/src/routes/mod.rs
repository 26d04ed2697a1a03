use std::time::Duration;

use axum::Router;
use storage::Repositories;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::WebError;
use crate::features::{fixtures, health, leagues, matches, roster, standings, teams};
use crate::middleware::auth::ApiKeys;
use crate::openapi::ApiDoc;

#[cfg(test)]
mod tests;

/// Full application router over the given store.
pub fn router(repos: Repositories, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .merge(leagues::routes::routes(api_keys.clone()))
        .merge(teams::routes::routes(api_keys.clone()))
        .merge(fixtures::routes::routes(api_keys.clone()))
        .merge(matches::routes::routes(api_keys.clone()))
        .merge(roster::routes::routes(api_keys))
        .merge(standings::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(health::routes::routes())
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(repos)
}

async fn not_found() -> WebError {
    WebError::NotFound
}
