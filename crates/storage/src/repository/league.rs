use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::LeagueRepository;
use crate::error::{Result, StorageError};
use crate::models::League;

/// Repository for League database operations
pub struct PgLeagueRepository {
    pool: PgPool,
}

impl PgLeagueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueRepository for PgLeagueRepository {
    async fn create(&self, name: &str, season: Option<&str>, country: &str) -> Result<League> {
        let league = sqlx::query_as::<_, League>(
            r#"
            INSERT INTO leagues (name, season, country)
            VALUES ($1, $2, $3)
            RETURNING league_id, name, season, country, created_at
            "#,
        )
        .bind(name)
        .bind(season)
        .bind(country)
        .fetch_one(&self.pool)
        .await?;

        Ok(league)
    }

    async fn find_by_id(&self, league_id: Uuid) -> Result<League> {
        let league = sqlx::query_as::<_, League>(
            r#"
            SELECT league_id, name, season, country, created_at
            FROM leagues
            WHERE league_id = $1
            "#,
        )
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(league)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<League>> {
        let league = sqlx::query_as::<_, League>(
            r#"
            SELECT league_id, name, season, country, created_at
            FROM leagues
            WHERE name = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(league)
    }

    async fn list(&self) -> Result<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>(
            r#"
            SELECT league_id, name, season, country, created_at
            FROM leagues
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(leagues)
    }
}
