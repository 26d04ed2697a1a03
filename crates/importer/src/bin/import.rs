use clap::{Parser, Subcommand};
use importer::{CsvFixtureImporter, ImportContext, LeagueImporter};
use std::path::PathBuf;
use storage::{
    Database, Repositories,
    services::{roster, standings},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "league-import")]
#[command(about = "Football league fixture importer and roster tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import fixtures from a CSV file (home_team, away_team, match_date, venue)
    Fixtures {
        #[arg(long)]
        league: Uuid,

        file: PathBuf,

        #[arg(long)]
        dry_run: bool,
    },
    /// Reduce a league's teams to the canonical club list
    Enforce {
        #[arg(long)]
        league: Uuid,
    },
    /// Create or refresh the Maltese Youth League with the canonical clubs
    Seed,
    /// Print a league table as JSON
    Standings {
        #[arg(long)]
        league: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("import={},importer={},storage={}", log_level, log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Connecting to database...");
    let db = Database::new(&cli.database_url).await?;
    db.run_migrations().await?;
    let repos = db.repositories();

    match cli.command {
        Commands::Fixtures {
            league,
            file,
            dry_run,
        } => {
            handle_fixture_import(repos, league, file, dry_run).await?;
        }
        Commands::Enforce { league } => {
            let outcome = roster::enforce_roster(&repos, league, &roster::CANONICAL_ROSTER).await?;
            tracing::info!(
                "✓ Roster enforced: {} deleted, {} created",
                outcome.deleted,
                outcome.created
            );
        }
        Commands::Seed => {
            let (league, outcome) = roster::seed_canonical_league(&repos).await?;
            tracing::info!(
                "✓ {} ready ({}): {} deleted, {} created",
                league.name,
                league.league_id,
                outcome.deleted,
                outcome.created
            );
        }
        Commands::Standings { league } => {
            let rows = standings::league_standings(&repos, league).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

async fn handle_fixture_import(
    repos: Repositories,
    league_id: Uuid,
    file: PathBuf,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading fixtures from: {}", file.display());

    let importer = if dry_run {
        CsvFixtureImporter::dry_run()
    } else {
        CsvFixtureImporter::new()
    };
    let context = ImportContext { repos, league_id };

    let summary = importer
        .import(&file.to_string_lossy(), &context)
        .await?;

    if dry_run {
        tracing::info!("✓ Validation finished, nothing written");
    } else {
        tracing::info!("✓ Import completed: {} fixture(s) inserted", summary.inserted);
    }

    Ok(())
}
