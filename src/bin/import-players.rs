//! Insert the built-in roster into the player database, skipping existing names.

use std::{env, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use hoop_story_back::{
    dao::player_store::sqlite::{SqliteConfig, SqlitePlayerStore},
    services::import_service::{import_players, roster},
};
use tracing_subscriber::EnvFilter;

const DEFAULT_DATABASE_URL: &str = "./data/players.db";

#[derive(Parser)]
#[command(about = "Import the built-in player roster")]
struct Import {
    /// Database file; falls back to `DATABASE_URL`, then `./data/players.db`.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Import::parse();
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    let store = SqlitePlayerStore::connect(SqliteConfig::new(database_url.clone()))
        .await
        .with_context(|| format!("opening database {database_url}"))?;
    let players = roster().context("parsing built-in roster")?;

    println!("Starting import of {} players...", players.len());
    let report = import_players(&store, players).await;

    println!("Import complete!");
    println!("  imported: {}", report.imported.len());
    println!("  skipped (already exists): {}", report.skipped.len());
    println!("  failed: {}", report.failed.len());
    for (name, error) in &report.failed {
        println!("    {name}: {error}");
    }

    Ok(if report.failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
