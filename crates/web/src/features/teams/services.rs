use std::collections::HashMap;

use storage::{
    Repositories,
    dto::{
        fixture::MatchSummary,
        team::{CreateTeamRequest, TeamDetailResponse},
    },
    error::Result,
    models::Team,
    repository::MatchFilter,
};
use uuid::Uuid;

/// Matches shown per section on a team page
const TEAM_PAGE_MATCHES: u32 = 10;

/// Add a team to an existing league
pub async fn add_team(repos: &Repositories, league_id: Uuid, request: &CreateTeamRequest) -> Result<Team> {
    repos.leagues.find_by_id(league_id).await?;

    let short_name = request
        .short_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let team = repos
        .teams
        .create(league_id, request.name.trim(), short_name)
        .await?;
    tracing::info!(%league_id, team_id = %team.team_id, name = %team.name, "Team added");

    Ok(team)
}

/// List a league's teams by name
pub async fn list_teams(repos: &Repositories, league_id: Uuid) -> Result<Vec<Team>> {
    repos.teams.list_by_league(league_id).await
}

/// Team with its next fixtures and most recent results
pub async fn team_detail(repos: &Repositories, league_id: Uuid, team_id: Uuid) -> Result<TeamDetailResponse> {
    let team = repos.teams.find_in_league(league_id, team_id).await?;

    let filter = MatchFilter::team(league_id, team_id, TEAM_PAGE_MATCHES);
    let upcoming = repos.matches.list_upcoming(&filter).await?;
    let results = repos.matches.list_results(&filter).await?;

    Ok(TeamDetailResponse {
        id: team.team_id,
        name: team.name,
        short_name: team.short_name,
        upcoming: upcoming.into_iter().map(MatchSummary::from).collect(),
        results: results.into_iter().map(MatchSummary::from).collect(),
    })
}

/// Team id to display name for one league
pub async fn team_names(repos: &Repositories, league_id: Uuid) -> Result<HashMap<Uuid, String>> {
    let teams = repos.teams.list_by_league(league_id).await?;
    Ok(teams.into_iter().map(|t| (t.team_id, t.name)).collect())
}
