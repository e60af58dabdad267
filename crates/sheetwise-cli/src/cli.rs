//! CLI argument definitions for sheetwise.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sheetwise_cli::logging::LogFormat;
use sheetwise_model::{Aggregation, EngineOptions};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "sheetwise",
    version,
    about = "Profile, clean and pivot spreadsheet data",
    long_about = "Profile columns, flag data-quality issues, apply one-step fixes \
                  and build pivot tables from CSV and Excel files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Engine tuning shared by all commands.
#[derive(Args)]
pub struct EngineArgs {
    /// Number of sample values shown per column.
    #[arg(long = "sample-size", value_name = "N", default_value_t = 5, global = true)]
    pub sample_size: usize,

    /// Missing share above which a missing-value issue is high severity.
    #[arg(
        long = "high-missing-ratio",
        value_name = "RATIO",
        default_value_t = 0.1,
        global = true
    )]
    pub high_missing_ratio: f64,

    /// Separator joining multi-column pivot keys.
    #[arg(
        long = "key-separator",
        value_name = "SEP",
        default_value = " - ",
        global = true
    )]
    pub key_separator: String,
}

impl EngineArgs {
    pub fn to_options(&self) -> EngineOptions {
        EngineOptions::new()
            .with_sample_size(self.sample_size)
            .with_high_missing_ratio(self.high_missing_ratio)
            .with_key_separator(self.key_separator.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show inferred column types, missing counts and samples.
    Profile(InspectArgs),

    /// List detected data-quality issues.
    Issues(InspectArgs),

    /// Apply cleaning transforms and optionally write the result.
    Clean(CleanArgs),

    /// Build a pivot table.
    Pivot(PivotArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV or Excel file to analyse.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV or Excel file to clean.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Replace missing cells in COLUMN with the column mean.
    #[arg(long = "fill-mean", value_name = "COLUMN")]
    pub fill_mean: Vec<String>,

    /// Drop rows where COLUMN is missing.
    #[arg(long = "drop-missing", value_name = "COLUMN")]
    pub drop_missing: Vec<String>,

    /// Remove exact duplicate rows (first occurrence kept).
    #[arg(long = "dedupe")]
    pub dedupe: bool,

    /// Address every detected issue automatically.
    ///
    /// Number columns are mean-filled, other columns drop their incomplete
    /// rows, then duplicates are removed.
    #[arg(long = "all", conflicts_with_all = ["fill_mean", "drop_missing", "dedupe"])]
    pub all: bool,

    /// Write the cleaned table to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PivotArgs {
    /// CSV or Excel file to pivot.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Row grouping column (repeatable).
    #[arg(long = "rows", value_name = "COLUMN", required = true)]
    pub rows: Vec<String>,

    /// Column grouping column (repeatable).
    #[arg(long = "columns", value_name = "COLUMN", required = true)]
    pub columns: Vec<String>,

    /// Value column to aggregate.
    #[arg(long = "value", value_name = "FIELD")]
    pub value: String,

    /// Aggregation to show.
    #[arg(long = "agg", value_enum, default_value = "sum")]
    pub agg: AggregationArg,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AggregationArg {
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl From<AggregationArg> for Aggregation {
    fn from(value: AggregationArg) -> Self {
        match value {
            AggregationArg::Sum => Self::Sum,
            AggregationArg::Avg => Self::Avg,
            AggregationArg::Count => Self::Count,
            AggregationArg::Min => Self::Min,
            AggregationArg::Max => Self::Max,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
