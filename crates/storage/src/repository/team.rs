use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::TeamRepository;
use crate::error::{Result, StorageError};
use crate::models::Team;

/// Repository for Team database operations
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    async fn create(&self, league_id: Uuid, name: &str, short_name: Option<&str>) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (league_id, name, short_name)
            VALUES ($1, $2, $3)
            RETURNING team_id, league_id, name, short_name, created_at
            "#,
        )
        .bind(league_id)
        .bind(name)
        .bind(short_name)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::missing_reference)?;

        Ok(team)
    }

    async fn find_in_league(&self, league_id: Uuid, team_id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, league_id, name, short_name, created_at
            FROM teams
            WHERE team_id = $1 AND league_id = $2
            "#,
        )
        .bind(team_id)
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    async fn list_by_league(&self, league_id: Uuid) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, league_id, name, short_name, created_at
            FROM teams
            WHERE league_id = $1
            ORDER BY name ASC, created_at ASC
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn delete_many(&self, team_ids: &[Uuid]) -> Result<u64> {
        if team_ids.is_empty() {
            return Ok(0);
        }

        // matches referencing these teams go with them (ON DELETE CASCADE)
        let result = sqlx::query(
            r#"
            DELETE FROM teams
            WHERE team_id = ANY($1)
            "#,
        )
        .bind(team_ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
