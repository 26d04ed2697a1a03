use std::collections::HashMap;

use storage::{
    models::Team,
    services::fixture_import::{FixtureRow, normalize_name, team_directory},
};
use tracing::warn;
use uuid::Uuid;

use crate::{ImporterError, Result};

pub struct FixtureValidator;

impl FixtureValidator {
    /// Checks parsed rows against a league's roster without writing anything.
    pub fn validate(rows: &[FixtureRow], teams: &[Team]) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if teams.is_empty() {
            report
                .errors
                .push("League has no teams; every fixture would be skipped".to_string());
        }
        if rows.is_empty() {
            report.errors.push(
                "No fixture rows found (expected columns home_team, away_team, match_date, venue)"
                    .to_string(),
            );
        }

        let directory = team_directory(teams);
        for (idx, row) in rows.iter().enumerate() {
            let fixture = idx + 1;
            let home = check_side(&mut report, fixture, "home_team", row.home_team.as_deref(), &directory);
            let away = check_side(&mut report, fixture, "away_team", row.away_team.as_deref(), &directory);

            let (Some(home), Some(away)) = (home, away) else {
                continue;
            };

            if home == away {
                report
                    .warnings
                    .push(format!("Fixture {}: team is drawn against itself", fixture));
            }
            if row.match_date.as_deref().is_none_or(|d| d.trim().is_empty()) {
                report
                    .warnings
                    .push(format!("Fixture {}: no match_date, listed as undated", fixture));
            }
            report.resolvable += 1;
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

fn check_side(
    report: &mut ValidationReport,
    fixture: usize,
    column: &str,
    name: Option<&str>,
    directory: &HashMap<String, Uuid>,
) -> Option<Uuid> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => {
            report
                .warnings
                .push(format!("Fixture {}: missing {}", fixture, column));
            None
        }
        Some(name) => {
            let team_id = directory.get(&normalize_name(name)).copied();
            if team_id.is_none() {
                report
                    .warnings
                    .push(format!("Fixture {}: unknown team '{}'", fixture, name));
            }
            team_id
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub resolvable: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
