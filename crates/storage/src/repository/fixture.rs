use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use super::{MatchFilter, MatchRepository};
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchStatus, MatchUpdate, NewMatch};

const MATCH_COLUMNS: &str = "match_id, league_id, home_team_id, away_team_id, match_date, venue, \
                             status, home_score, away_score, created_at, updated_at";

#[derive(FromRow)]
struct MatchRow {
    match_id: Uuid,
    league_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    match_date: Option<String>,
    venue: Option<String>,
    status: String,
    home_score: Option<i32>,
    away_score: Option<i32>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl TryFrom<MatchRow> for Match {
    type Error = StorageError;

    fn try_from(row: MatchRow) -> Result<Self> {
        let status = row
            .status
            .parse::<MatchStatus>()
            .map_err(|e| StorageError::Corrupt(format!("match {}: {}", row.match_id, e)))?;

        Ok(Match {
            match_id: row.match_id,
            league_id: row.league_id,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            match_date: row.match_date,
            venue: row.venue,
            status,
            home_score: row.home_score,
            away_score: row.away_score,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_matches(rows: Vec<MatchRow>) -> Result<Vec<Match>> {
    rows.into_iter().map(Match::try_from).collect()
}

/// Repository for Match database operations
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn filtered<'q>(status_clause: &str, filter: &MatchFilter) -> QueryBuilder<'q, sqlx::Postgres> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM matches WHERE {} AND league_id = ",
            MATCH_COLUMNS, status_clause
        ));
        query.push_bind(filter.league_id);

        if let Some(team_id) = filter.team_id {
            query.push(" AND (home_team_id = ");
            query.push_bind(team_id);
            query.push(" OR away_team_id = ");
            query.push_bind(team_id);
            query.push(")");
        }

        query
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    async fn create(&self, new_match: &NewMatch) -> Result<Match> {
        let row = sqlx::query_as::<_, MatchRow>(&format!(
            r#"
            INSERT INTO matches (league_id, home_team_id, away_team_id, match_date, venue, status)
            VALUES ($1, $2, $3, $4, $5, 'scheduled')
            RETURNING {}
            "#,
            MATCH_COLUMNS
        ))
        .bind(new_match.league_id)
        .bind(new_match.home_team_id)
        .bind(new_match.away_team_id)
        .bind(new_match.match_date.as_deref())
        .bind(new_match.venue.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::missing_reference)?;

        row.try_into()
    }

    async fn find_by_id(&self, match_id: Uuid) -> Result<Match> {
        let row = sqlx::query_as::<_, MatchRow>(&format!(
            "SELECT {} FROM matches WHERE match_id = $1",
            MATCH_COLUMNS
        ))
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        row.try_into()
    }

    async fn update(&self, match_id: Uuid, update: &MatchUpdate) -> Result<Match> {
        if update.is_empty() {
            return self.find_by_id(match_id).await;
        }

        let row = sqlx::query_as::<_, MatchRow>(&format!(
            r#"
            UPDATE matches
            SET
                home_score = COALESCE($2, home_score),
                away_score = COALESCE($3, away_score),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE match_id = $1
            RETURNING {}
            "#,
            MATCH_COLUMNS
        ))
        .bind(match_id)
        .bind(update.home_score)
        .bind(update.away_score)
        .bind(update.status.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        row.try_into()
    }

    async fn list_played(&self, league_id: Uuid) -> Result<Vec<Match>> {
        let rows = sqlx::query_as::<_, MatchRow>(&format!(
            "SELECT {} FROM matches WHERE league_id = $1 AND status = 'played'",
            MATCH_COLUMNS
        ))
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        into_matches(rows)
    }

    async fn list_upcoming(&self, filter: &MatchFilter) -> Result<Vec<Match>> {
        let mut query = Self::filtered("status IN ('scheduled', 'postponed')", filter);
        query.push(" ORDER BY match_date ASC NULLS FIRST, created_at ASC LIMIT ");
        query.push_bind(i64::from(filter.limit));

        let rows: Vec<MatchRow> = query.build_query_as().fetch_all(&self.pool).await?;

        into_matches(rows)
    }

    async fn list_results(&self, filter: &MatchFilter) -> Result<Vec<Match>> {
        let mut query = Self::filtered("status = 'played'", filter);
        query.push(" ORDER BY match_date DESC NULLS LAST, created_at ASC LIMIT ");
        query.push_bind(i64::from(filter.limit));

        let rows: Vec<MatchRow> = query.build_query_as().fetch_all(&self.pool).await?;

        into_matches(rows)
    }
}
