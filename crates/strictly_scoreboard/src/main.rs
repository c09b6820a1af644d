//! Strictly Scoreboard - unified CLI
//!
//! Runs the HTTP scoreboard server or scores a point sequence offline.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_scoreboard::cli::{Cli, Command};
use strictly_scoreboard::{
    AppState, MatchService, MatchStore, ServerConfig, render_scoreboard, router, score_sequence,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_scoreboard=debug")),
        )
        .init();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Play {
            player_one,
            player_two,
            points,
        } => run_play(&player_one, &player_two, &points),
    }
}

/// Run the HTTP scoreboard server
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_server(config_path: PathBuf, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = ServerConfig::load_or_default(&config_path)?.with_overrides(host, port);
    let address = format!("{}:{}", config.host(), config.port());

    let service = MatchService::new(MatchStore::new(), config);
    let app = router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "Scoreboard server ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Score a point sequence and print the result
#[instrument(skip(points))]
fn run_play(player_one: &str, player_two: &str, points: &str) -> Result<()> {
    let tennis_match = score_sequence(player_one, player_two, points)?;
    info!(state = %tennis_match.state(), "Sequence scored");
    println!("{}", render_scoreboard(&tennis_match));
    Ok(())
}
