use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{LeagueRepository, MatchFilter, MatchRepository, StoreHealth, TeamRepository};
use crate::error::{Result, StorageError};
use crate::models::{League, Match, MatchStatus, MatchUpdate, NewMatch, Team};

#[derive(Default)]
struct MemoryState {
    leagues: Vec<League>,
    teams: Vec<Team>,
    matches: Vec<Match>,
}

/// Process-local store. Records are kept in insertion order, which doubles
/// as the creation-order tie-break for every listing.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_count(&self) -> usize {
        self.state.read().teams.len()
    }

    pub fn match_count(&self) -> usize {
        self.state.read().matches.len()
    }
}

fn now() -> chrono::NaiveDateTime {
    Utc::now().naive_utc()
}

fn matches_filter(m: &Match, filter: &MatchFilter) -> bool {
    m.league_id == filter.league_id && filter.team_id.is_none_or(|team_id| m.involves(team_id))
}

#[async_trait]
impl LeagueRepository for MemoryStore {
    async fn create(&self, name: &str, season: Option<&str>, country: &str) -> Result<League> {
        let league = League {
            league_id: Uuid::new_v4(),
            name: name.to_string(),
            season: season.map(str::to_string),
            country: country.to_string(),
            created_at: now(),
        };
        self.state.write().leagues.push(league.clone());
        Ok(league)
    }

    async fn find_by_id(&self, league_id: Uuid) -> Result<League> {
        self.state
            .read()
            .leagues
            .iter()
            .find(|l| l.league_id == league_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<League>> {
        Ok(self
            .state
            .read()
            .leagues
            .iter()
            .find(|l| l.name == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<League>> {
        let mut leagues: Vec<League> = self.state.read().leagues.iter().rev().cloned().collect();
        leagues.sort_by_key(|l| Reverse(l.created_at));
        Ok(leagues)
    }
}

#[async_trait]
impl TeamRepository for MemoryStore {
    async fn create(&self, league_id: Uuid, name: &str, short_name: Option<&str>) -> Result<Team> {
        let mut state = self.state.write();
        if !state.leagues.iter().any(|l| l.league_id == league_id) {
            return Err(StorageError::NotFound);
        }

        let team = Team {
            team_id: Uuid::new_v4(),
            league_id,
            name: name.to_string(),
            short_name: short_name.map(str::to_string),
            created_at: now(),
        };
        state.teams.push(team.clone());
        Ok(team)
    }

    async fn find_in_league(&self, league_id: Uuid, team_id: Uuid) -> Result<Team> {
        self.state
            .read()
            .teams
            .iter()
            .find(|t| t.team_id == team_id && t.league_id == league_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_by_league(&self, league_id: Uuid) -> Result<Vec<Team>> {
        let mut teams: Vec<Team> = self
            .state
            .read()
            .teams
            .iter()
            .filter(|t| t.league_id == league_id)
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    async fn delete_many(&self, team_ids: &[Uuid]) -> Result<u64> {
        let mut state = self.state.write();
        let before = state.teams.len();
        state.teams.retain(|t| !team_ids.contains(&t.team_id));
        let deleted = before - state.teams.len();

        state
            .matches
            .retain(|m| !team_ids.contains(&m.home_team_id) && !team_ids.contains(&m.away_team_id));

        Ok(deleted as u64)
    }
}

#[async_trait]
impl MatchRepository for MemoryStore {
    async fn create(&self, new_match: &NewMatch) -> Result<Match> {
        let mut state = self.state.write();
        let team_exists = |team_id: Uuid| state.teams.iter().any(|t| t.team_id == team_id);
        if !state.leagues.iter().any(|l| l.league_id == new_match.league_id)
            || !team_exists(new_match.home_team_id)
            || !team_exists(new_match.away_team_id)
        {
            return Err(StorageError::NotFound);
        }

        let record = Match {
            match_id: Uuid::new_v4(),
            league_id: new_match.league_id,
            home_team_id: new_match.home_team_id,
            away_team_id: new_match.away_team_id,
            match_date: new_match.match_date.clone(),
            venue: new_match.venue.clone(),
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
            created_at: now(),
            updated_at: None,
        };
        state.matches.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, match_id: Uuid) -> Result<Match> {
        self.state
            .read()
            .matches
            .iter()
            .find(|m| m.match_id == match_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn update(&self, match_id: Uuid, update: &MatchUpdate) -> Result<Match> {
        let mut state = self.state.write();
        let record = state
            .matches
            .iter_mut()
            .find(|m| m.match_id == match_id)
            .ok_or(StorageError::NotFound)?;

        if !update.is_empty() {
            update.apply_to(record);
            record.updated_at = Some(now());
        }

        Ok(record.clone())
    }

    async fn list_played(&self, league_id: Uuid) -> Result<Vec<Match>> {
        Ok(self
            .state
            .read()
            .matches
            .iter()
            .filter(|m| m.league_id == league_id && m.status == MatchStatus::Played)
            .cloned()
            .collect())
    }

    async fn list_upcoming(&self, filter: &MatchFilter) -> Result<Vec<Match>> {
        let mut upcoming: Vec<Match> = self
            .state
            .read()
            .matches
            .iter()
            .filter(|m| m.status.is_upcoming() && matches_filter(m, filter))
            .cloned()
            .collect();
        // None sorts before Some, so undated fixtures come first
        upcoming.sort_by(|a, b| a.match_date.cmp(&b.match_date));
        upcoming.truncate(filter.limit as usize);
        Ok(upcoming)
    }

    async fn list_results(&self, filter: &MatchFilter) -> Result<Vec<Match>> {
        let mut results: Vec<Match> = self
            .state
            .read()
            .matches
            .iter()
            .filter(|m| m.status == MatchStatus::Played && matches_filter(m, filter))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.match_date.cmp(&a.match_date));
        results.truncate(filter.limit as usize);
        Ok(results)
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn league_with_teams(store: &MemoryStore, names: &[&str]) -> (Uuid, Vec<Team>) {
        let league = LeagueRepository::create(store, "Test League", None, "Malta")
            .await
            .unwrap();
        let mut teams = Vec::new();
        for name in names {
            teams.push(
                TeamRepository::create(store, league.league_id, name, None)
                    .await
                    .unwrap(),
            );
        }
        (league.league_id, teams)
    }

    async fn fixture(store: &MemoryStore, league_id: Uuid, home: &Team, away: &Team, date: Option<&str>) -> Match {
        MatchRepository::create(
            store,
            &NewMatch {
                league_id,
                home_team_id: home.team_id,
                away_team_id: away.team_id,
                match_date: date.map(str::to_string),
                venue: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_team_creation_requires_league() {
        let store = MemoryStore::new();
        let result = TeamRepository::create(&store, Uuid::new_v4(), "HIBS", None).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_match_creation_requires_league_and_teams() {
        let store = MemoryStore::new();
        let (league_id, t) = league_with_teams(&store, &["A", "B"]).await;

        let unknown_league = NewMatch {
            league_id: Uuid::new_v4(),
            home_team_id: t[0].team_id,
            away_team_id: t[1].team_id,
            match_date: None,
            venue: None,
        };
        let result = MatchRepository::create(&store, &unknown_league).await;
        assert!(matches!(result, Err(StorageError::NotFound)));

        let unknown_team = NewMatch {
            league_id,
            away_team_id: Uuid::new_v4(),
            ..unknown_league
        };
        let result = MatchRepository::create(&store, &unknown_team).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
        assert_eq!(store.match_count(), 0);
    }

    #[tokio::test]
    async fn test_teams_listed_by_name() {
        let store = MemoryStore::new();
        let (league_id, _) = league_with_teams(&store, &["ZABBAR", "BALZAN", "GOZO"]).await;

        let names: Vec<String> = store
            .list_by_league(league_id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["BALZAN", "GOZO", "ZABBAR"]);
    }

    #[tokio::test]
    async fn test_find_team_scoped_to_league() {
        let store = MemoryStore::new();
        let (_, teams) = league_with_teams(&store, &["HIBS"]).await;
        let (other_league, _) = league_with_teams(&store, &[]).await;

        let result = store.find_in_league(other_league, teams[0].team_id).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_upcoming_sorted_ascending_with_undated_first() {
        let store = MemoryStore::new();
        let (league_id, t) = league_with_teams(&store, &["A", "B"]).await;
        fixture(&store, league_id, &t[0], &t[1], Some("2025-03-10")).await;
        fixture(&store, league_id, &t[1], &t[0], Some("2025-03-01")).await;
        fixture(&store, league_id, &t[0], &t[1], None).await;

        let dates: Vec<Option<String>> = store
            .list_upcoming(&MatchFilter::league(league_id, 20))
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.match_date)
            .collect();
        assert_eq!(
            dates,
            vec![None, Some("2025-03-01".to_string()), Some("2025-03-10".to_string())]
        );
    }

    #[tokio::test]
    async fn test_results_sorted_descending_and_limited() {
        let store = MemoryStore::new();
        let (league_id, t) = league_with_teams(&store, &["A", "B"]).await;
        let played = MatchUpdate {
            home_score: Some(1),
            away_score: Some(0),
            status: Some(MatchStatus::Played),
        };
        for date in ["2025-01-01", "2025-01-15", "2025-01-08"] {
            let m = fixture(&store, league_id, &t[0], &t[1], Some(date)).await;
            store.update(m.match_id, &played).await.unwrap();
        }
        fixture(&store, league_id, &t[0], &t[1], Some("2025-02-01")).await;

        let dates: Vec<String> = store
            .list_results(&MatchFilter::league(league_id, 2))
            .await
            .unwrap()
            .into_iter()
            .filter_map(|m| m.match_date)
            .collect();
        assert_eq!(dates, vec!["2025-01-15", "2025-01-08"]);
    }

    #[tokio::test]
    async fn test_update_stamps_timestamp_only_when_changed() {
        let store = MemoryStore::new();
        let (league_id, t) = league_with_teams(&store, &["A", "B"]).await;
        let m = fixture(&store, league_id, &t[0], &t[1], None).await;

        let unchanged = store.update(m.match_id, &MatchUpdate::default()).await.unwrap();
        assert!(unchanged.updated_at.is_none());

        let update = MatchUpdate {
            status: Some(MatchStatus::Postponed),
            ..Default::default()
        };
        let changed = store.update(m.match_id, &update).await.unwrap();
        assert_eq!(changed.status, MatchStatus::Postponed);
        assert!(changed.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_delete_many_removes_their_matches() {
        let store = MemoryStore::new();
        let (league_id, t) = league_with_teams(&store, &["A", "B", "C"]).await;
        fixture(&store, league_id, &t[0], &t[1], None).await;
        fixture(&store, league_id, &t[1], &t[2], None).await;

        let deleted = store.delete_many(&[t[0].team_id]).await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(store.team_count(), 2);
        assert_eq!(store.match_count(), 1);
    }
}
