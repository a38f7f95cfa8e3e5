//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fact Loader - synthetic fact generator for the save-fact API
#[derive(Parser, Debug)]
#[command(
    name = "fact-loader",
    author,
    version,
    about = "Load generator for the save-fact reporting API",
    long_about = "Generates synthetic facts and submits them to the save-fact API.\n\n\
                  The fact set is pushed through a bounded queue for the configured \n\
                  number of passes and drained by a single submit worker."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "FACT_LOADER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "FACT_LOADER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate facts and submit them
    Run(RunArgs),

    /// Validate a configuration file without running
    Validate(ValidateArgs),

    /// Display the effective load plan
    Info(InfoArgs),
}

/// Settings shared by `run` and `info`
#[derive(Parser, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Path to configuration file (TOML or JSON); built-in defaults when omitted
    #[arg(short, long, env = "FACT_LOADER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the save-fact endpoint URL
    #[arg(long, env = "FACT_LOADER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Bearer token
    #[arg(long, env = "FACT_LOADER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Override the number of facts per pass
    #[arg(long, env = "FACT_LOADER_COUNT")]
    pub count: Option<usize>,

    /// Override the number of passes over the fact set
    #[arg(long, env = "FACT_LOADER_PASSES")]
    pub passes: Option<usize>,

    /// Override the dispatch queue capacity
    #[arg(long, env = "FACT_LOADER_QUEUE_CAPACITY")]
    pub queue_capacity: Option<usize>,
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Log facts instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any submission failed
    #[arg(long)]
    pub fail_on_error: bool,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "FACT_LOADER_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "fact-loader.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the first N generated facts
    #[arg(long, default_value = "0")]
    pub sample: usize,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
