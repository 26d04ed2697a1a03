use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::root,
        features::health::handlers::store_status,
        features::leagues::handlers::list_leagues,
        features::leagues::handlers::create_league,
        features::teams::handlers::list_teams,
        features::teams::handlers::add_team,
        features::teams::handlers::get_team,
        features::fixtures::handlers::upload_fixtures,
        features::matches::handlers::update_match,
        features::matches::handlers::upcoming_matches,
        features::matches::handlers::recent_results,
        features::standings::handlers::get_standings,
        features::roster::handlers::enforce_teams,
        features::roster::handlers::seed_maltese_league,
    ),
    components(
        schemas(
            storage::dto::common::MessageResponse,
            storage::dto::health::HealthResponse,
            storage::dto::league::CreateLeagueRequest,
            storage::dto::league::LeagueResponse,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::team::TeamDetailResponse,
            storage::dto::fixture::UpdateMatchRequest,
            storage::dto::fixture::MatchResponse,
            storage::dto::fixture::MatchSummary,
            storage::dto::fixture::UpcomingMatchEntry,
            storage::dto::fixture::ResultEntry,
            storage::dto::fixture::ImportSummary,
            storage::dto::roster::EnforceRosterResponse,
            storage::dto::roster::SeedLeagueResponse,
            storage::models::MatchStatus,
            storage::models::StandingRow,
            features::fixtures::handlers::FixtureUpload,
        )
    ),
    tags(
        (name = "leagues", description = "League administration and listing"),
        (name = "teams", description = "Teams and team pages"),
        (name = "fixtures", description = "Fixture CSV upload"),
        (name = "matches", description = "Scores, upcoming fixtures and results"),
        (name = "standings", description = "League table"),
        (name = "roster", description = "Canonical club list enforcement"),
        (name = "health", description = "Service diagnostics"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
