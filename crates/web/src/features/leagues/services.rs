use storage::{
    Repositories,
    dto::league::CreateLeagueRequest,
    error::Result,
    models::{DEFAULT_COUNTRY, League},
};

/// List all leagues, newest first
pub async fn list_leagues(repos: &Repositories) -> Result<Vec<League>> {
    repos.leagues.list().await
}

/// Create a new league
pub async fn create_league(repos: &Repositories, request: &CreateLeagueRequest) -> Result<League> {
    let season = request
        .season
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let league = repos
        .leagues
        .create(request.name.trim(), season, DEFAULT_COUNTRY)
        .await?;
    tracing::info!(league_id = %league.league_id, name = %league.name, "League created");

    Ok(league)
}
