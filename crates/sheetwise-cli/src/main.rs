//! sheetwise CLI.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use sheetwise_cli::commands::{CleanRequest, PivotRequest, load_dataset, run_clean, run_pivot};
use sheetwise_cli::logging::{LogConfig, init_logging};
use sheetwise_model::EngineOptions;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command};
use crate::summary::{print_clean, print_issues, print_pivot, print_profile};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = cli.engine.to_options();
    let exit_code = match run(cli.command, &options) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command, options: &EngineOptions) -> Result<()> {
    match command {
        Command::Profile(args) => {
            let dataset = load_dataset(&args.input, options)?;
            if args.json {
                print_json(&dataset)?;
            } else {
                print_profile(&dataset);
            }
        }
        Command::Issues(args) => {
            let dataset = load_dataset(&args.input, options)?;
            if args.json {
                print_json(dataset.issues())?;
            } else {
                print_issues(&dataset);
            }
        }
        Command::Clean(args) => {
            let request = CleanRequest {
                input: args.input,
                fill_mean: args.fill_mean,
                drop_missing: args.drop_missing,
                dedupe: args.dedupe,
                all: args.all,
                output: args.output,
            };
            let outcome = run_clean(&request, options)?;
            print_clean(&outcome);
        }
        Command::Pivot(args) => {
            let request = PivotRequest {
                input: args.input,
                rows: args.rows,
                columns: args.columns,
                value: args.value,
                agg: args.agg.into(),
            };
            let (config, table) = run_pivot(&request, options)?;
            if args.json {
                print_json(&table)?;
            } else {
                print_pivot(&config, &table);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logging configuration from the global CLI flags.
fn log_config(cli: &Cli) -> LogConfig {
    LogConfig::for_verbosity(
        cli.verbosity.tracing_level_filter(),
        cli.verbosity.is_present(),
    )
    .with_level_override(cli.log_level.map(LevelFilter::from))
    .with_format(cli.log_format.into())
    .with_log_file(cli.log_file.clone())
    .with_color(cli.color.color)
}
