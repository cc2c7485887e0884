//! riftline command-line front end
//!
//! Argument definitions and command handlers for the `riftline` binary.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use riftline_api::{ClientConfig, Region, RetryPolicy};
use tracing::Level;

use crate::output::OutputStyle;

#[derive(Debug, Parser)]
#[command(
    name = "riftline",
    about = "Query League of Legends match history and live games",
    version
)]
pub struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// API key sent with every request
    #[arg(long, env = "RIFTLINE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Platform region (euw1, na1, kr, ...)
    #[arg(short, long, env = "RIFTLINE_REGION", default_value = "euw1", global = true)]
    pub region: Region,

    /// Override the regional API host
    #[arg(long, env = "RIFTLINE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored text output (also honours NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Text output style from `--no-color` and the environment.
    pub fn output_style(&self) -> OutputStyle {
        let style = OutputStyle::new();
        if self.no_color { style.no_color() } else { style }
    }

    /// Client configuration from arguments, with timeouts and retry knobs from
    /// the environment.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing API key: pass --api-key or set RIFTLINE_API_KEY"))?;

        let mut config = ClientConfig::new(api_key, self.region)
            .with_timeouts_from_env()
            .with_retry_policy(RetryPolicy::from_env()?);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        Ok(config)
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Short human-readable summary
    Text,
    /// JSON output
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match history (match-v4)
    #[command(subcommand)]
    Match(MatchCommands),

    /// Live games (spectator-v4)
    #[command(subcommand)]
    Spectator(SpectatorCommands),
}

#[derive(Debug, Subcommand)]
pub enum MatchCommands {
    /// Show a single match
    Get {
        /// Match id
        match_id: i64,
    },

    /// Show the timeline of a match
    Timeline {
        /// Match id
        match_id: i64,
    },

    /// List one page of an account's matches
    List {
        /// Encrypted account id
        account_id: String,

        /// First index (inclusive)
        #[arg(long)]
        begin: Option<i32>,

        /// Last index (exclusive)
        #[arg(long)]
        end: Option<i32>,

        /// Only matches with this champion (repeatable)
        #[arg(long = "champion")]
        champions: Vec<i32>,

        /// Only matches in this queue (repeatable)
        #[arg(long = "queue")]
        queues: Vec<i32>,

        /// Only matches in this season (repeatable)
        #[arg(long = "season")]
        seasons: Vec<i32>,
    },

    /// Walk an account's full history page by page
    All {
        /// Encrypted account id
        account_id: String,

        /// Stop after this many matches
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List match ids played with a tournament code
    TournamentIds {
        /// Tournament code
        code: String,
    },

    /// Show a match played with a tournament code
    Tournament {
        /// Match id
        match_id: i64,

        /// Tournament code
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SpectatorCommands {
    /// List featured games
    Featured,

    /// Show the game a summoner is currently playing
    Current {
        /// Encrypted summoner id
        summoner_id: String,
    },
}
