//! League table computation.
//!
//! The table is rebuilt from the roster and the played matches on every
//! request; nothing here is persisted.

use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Match, MatchStatus, StandingRow, Team};
use crate::repository::Repositories;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

/// Sorted table plus the played matches that could not be counted because
/// one of their teams is not on the league roster.
#[derive(Debug, Clone, Default)]
pub struct StandingsTable {
    pub rows: Vec<StandingRow>,
    pub skipped_matches: Vec<Uuid>,
}

/// Builds the ranked table for `teams` from `matches`.
///
/// Only matches with status `played` count. A missing score counts as zero.
/// Rows are ordered by points, goal difference and goals scored (all
/// descending), then by team name; positions are consecutive even when
/// every key is level.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> StandingsTable {
    let mut index: HashMap<Uuid, usize> = HashMap::with_capacity(teams.len());
    let mut rows: Vec<StandingRow> = Vec::with_capacity(teams.len());
    for team in teams {
        index.entry(team.team_id).or_insert_with(|| {
            rows.push(StandingRow::new(team.team_id, team.name.clone()));
            rows.len() - 1
        });
    }

    let mut skipped_matches = Vec::new();

    for m in matches.iter().filter(|m| m.status == MatchStatus::Played) {
        let (Some(&home), Some(&away)) = (index.get(&m.home_team_id), index.get(&m.away_team_id))
        else {
            tracing::warn!(
                match_id = %m.match_id,
                home_team_id = %m.home_team_id,
                away_team_id = %m.away_team_id,
                "Played match references a team outside the league roster, skipping"
            );
            skipped_matches.push(m.match_id);
            continue;
        };

        if m.home_score.is_none() || m.away_score.is_none() {
            tracing::warn!(match_id = %m.match_id, "Played match is missing a score, counting it as 0");
        }
        let home_goals = goals(m.home_score);
        let away_goals = goals(m.away_score);

        record(&mut rows[home], home_goals, away_goals);
        record(&mut rows[away], away_goals, home_goals);
    }

    rows.sort_by(table_order);
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i as u32 + 1;
    }

    StandingsTable {
        rows,
        skipped_matches,
    }
}

/// Loads the league's roster and played matches and ranks them.
/// A league without teams yields an empty table.
pub async fn league_standings(repos: &Repositories, league_id: Uuid) -> Result<Vec<StandingRow>> {
    let teams = repos.teams.list_by_league(league_id).await?;
    if teams.is_empty() {
        return Ok(Vec::new());
    }

    let played = repos.matches.list_played(league_id).await?;
    let table = compute_standings(&teams, &played);

    if !table.skipped_matches.is_empty() {
        tracing::warn!(
            %league_id,
            skipped = table.skipped_matches.len(),
            "Standings computed with unresolved matches left out"
        );
    }

    Ok(table.rows)
}

fn goals(score: Option<i32>) -> u32 {
    score.map_or(0, |s| s.max(0) as u32)
}

fn record(row: &mut StandingRow, scored: u32, conceded: u32) {
    row.played += 1;
    row.goals_for += u64::from(scored);
    row.goals_against += u64::from(conceded);
    row.goal_difference += i64::from(scored) - i64::from(conceded);

    match scored.cmp(&conceded) {
        Ordering::Greater => {
            row.won += 1;
            row.points += POINTS_FOR_WIN;
        }
        Ordering::Less => row.lost += 1,
        Ordering::Equal => {
            row.drawn += 1;
            row.points += POINTS_FOR_DRAW;
        }
    }
}

fn table_order(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_name.cmp(&b.team_name))
        .then_with(|| a.team_id.cmp(&b.team_id))
}
