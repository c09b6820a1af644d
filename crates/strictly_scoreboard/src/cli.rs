//! Command-line interface for strictly_scoreboard.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Scoreboard - tennis match scoring server
#[derive(Parser, Debug)]
#[command(name = "strictly_scoreboard")]
#[command(about = "Tennis scoreboard server and offline scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP scoreboard server
    Serve {
        /// Path to server configuration file
        #[arg(short, long, default_value = "scoreboard.toml")]
        config: PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Score a point sequence offline and print the scoreboard
    Play {
        /// Name of player 1
        #[arg(long, default_value = "Player One")]
        player_one: String,

        /// Name of player 2
        #[arg(long, default_value = "Player Two")]
        player_two: String,

        /// Points won, in order: '1' or '2' per point (e.g. "11221")
        points: String,
    },
}
