//! Entity store for leagues, teams and matches.
//!
//! Services only see the traits below. `postgres` backs them with sqlx,
//! `memory` keeps everything in process for tests and database-less runs.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{League, Match, MatchUpdate, NewMatch, Team};

pub mod fixture;
pub mod league;
pub mod memory;
pub mod team;


pub use fixture::PgMatchRepository;
pub use league::PgLeagueRepository;
pub use memory::MemoryStore;
pub use team::PgTeamRepository;

#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn create(&self, name: &str, season: Option<&str>, country: &str) -> Result<League>;

    /// Fails with `StorageError::NotFound` when the league does not exist
    async fn find_by_id(&self, league_id: Uuid) -> Result<League>;

    async fn find_by_name(&self, name: &str) -> Result<Option<League>>;

    /// Newest first
    async fn list(&self) -> Result<Vec<League>>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create(&self, league_id: Uuid, name: &str, short_name: Option<&str>) -> Result<Team>;

    /// Fails with `StorageError::NotFound` unless the team exists inside that league
    async fn find_in_league(&self, league_id: Uuid, team_id: Uuid) -> Result<Team>;

    /// Ordered by name, then creation time
    async fn list_by_league(&self, league_id: Uuid) -> Result<Vec<Team>>;

    /// Deletes the given teams along with the matches they appear in.
    /// Returns the number of teams removed.
    async fn delete_many(&self, team_ids: &[Uuid]) -> Result<u64>;
}

/// Narrows a match listing to one league, optionally one team, capped at `limit`.
#[derive(Debug, Clone, Copy)]
pub struct MatchFilter {
    pub league_id: Uuid,
    pub team_id: Option<Uuid>,
    pub limit: u32,
}

impl MatchFilter {
    pub fn league(league_id: Uuid, limit: u32) -> Self {
        Self {
            league_id,
            team_id: None,
            limit,
        }
    }

    pub fn team(league_id: Uuid, team_id: Uuid, limit: u32) -> Self {
        Self {
            league_id,
            team_id: Some(team_id),
            limit,
        }
    }
}

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn create(&self, new_match: &NewMatch) -> Result<Match>;

    async fn find_by_id(&self, match_id: Uuid) -> Result<Match>;

    /// Applies a partial update and stamps `updated_at`. An empty update is a no-op read.
    async fn update(&self, match_id: Uuid, update: &MatchUpdate) -> Result<Match>;

    async fn list_played(&self, league_id: Uuid) -> Result<Vec<Match>>;

    /// Scheduled or postponed, earliest date first; undated fixtures lead
    async fn list_upcoming(&self, filter: &MatchFilter) -> Result<Vec<Match>>;

    /// Played, latest date first; undated results trail
    async fn list_results(&self, filter: &MatchFilter) -> Result<Vec<Match>>;
}

#[async_trait]
pub trait StoreHealth: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn ping(&self) -> Result<()>;
}

/// Handles to every repository, cheap to clone into request handlers.
#[derive(Clone)]
pub struct Repositories {
    pub leagues: Arc<dyn LeagueRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub matches: Arc<dyn MatchRepository>,
    pub health: Arc<dyn StoreHealth>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            leagues: Arc::new(PgLeagueRepository::new(pool.clone())),
            teams: Arc::new(PgTeamRepository::new(pool.clone())),
            matches: Arc::new(PgMatchRepository::new(pool.clone())),
            health: Arc::new(PgHealth { pool }),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_memory(MemoryStore::new())
    }

    pub fn from_memory(store: MemoryStore) -> Self {
        Self {
            leagues: Arc::new(store.clone()),
            teams: Arc::new(store.clone()),
            matches: Arc::new(store.clone()),
            health: Arc::new(store),
        }
    }
}

struct PgHealth {
    pool: PgPool,
}

#[async_trait]
impl StoreHealth for PgHealth {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
