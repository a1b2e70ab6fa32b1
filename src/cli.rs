use clap::{Parser, Subcommand};
use scoreboard_common::PongId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(author, version, about = "Leaderboard and pong match storage")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides the config file)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging (overrides the config file's logging.filter; RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database schema and insert the sample rows
    Init {
        /// Skip inserting the sample rows
        #[arg(long)]
        no_seed: bool,
    },

    /// Insert the sample rows, skipping ones already present
    Seed,

    /// Leaderboard entries
    Scores {
        #[command(subcommand)]
        command: ScoreCommands,
    },

    /// Pong match results
    Pongs {
        #[command(subcommand)]
        command: PongCommands,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
pub enum ScoreCommands {
    /// List every score
    List,

    /// Show the score for a username
    Show {
        username: String,
    },

    /// Record a new score
    Add {
        /// Display name
        name: String,

        /// Unique username
        username: String,

        score: String,

        /// Date of score as MM-DD-YYYY (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PongCommands {
    /// List matches
    List {
        /// Only matches this player took part in
        #[arg(long)]
        user: Option<String>,
    },

    /// Show one match
    Show {
        id: PongId,
    },

    /// Record a finished match
    Add {
        #[arg(long, default_value = "none")]
        user1: String,

        #[arg(long, default_value = "none")]
        user2: String,

        #[arg(long, default_value = "0")]
        score1: String,

        #[arg(long, default_value = "0")]
        score2: String,

        #[arg(long, default_value = "none")]
        result1: String,

        #[arg(long, default_value = "none")]
        result2: String,

        /// When the match was played, MM-DD-YYYY HH:MM:SS
        #[arg(long, required = true)]
        at: String,
    },

    /// Change fields of a match; invalid values are ignored
    Update {
        id: PongId,

        /// Three-character username
        #[arg(long)]
        user1: Option<String>,

        /// Three-character username
        #[arg(long)]
        user2: Option<String>,

        /// Integer >= 0
        #[arg(long, allow_hyphen_values = true)]
        score1: Option<String>,

        /// Integer >= 0
        #[arg(long, allow_hyphen_values = true)]
        score2: Option<String>,

        /// Win or Loss
        #[arg(long)]
        result1: Option<String>,

        /// Win or Loss
        #[arg(long)]
        result2: Option<String>,
    },

    /// Delete a match
    Delete {
        id: PongId,
    },
}
