//! Column type generalizer CLI.

use clap::{ColorChoice, Parser};
use dtgen_cli::logging::{LogConfig, LogFormat, init_logging};
use dtgen_cli::pipeline::{RunConfig, exit_code, log_failure, run};
use dtgen_cli::summary::{print_summary_json, print_summary_table};
use dtgen_core::{BoolParsing, GeneralizeOptions};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{BoolParsingArg, Cli, LogFormatArg, LogLevelArg, SummaryFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    let guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    };

    let result = run(&run_config_from_cli(&cli));
    let mut code = exit_code(&result);
    match &result {
        Ok(outcome) => match cli.summary {
            Some(SummaryFormatArg::Table) => print_summary_table(outcome),
            Some(SummaryFormatArg::Json) => {
                if let Err(error) = print_summary_json(outcome) {
                    tracing::error!("failed to render summary: {error}");
                    code = 1;
                }
            }
            None => {}
        },
        Err(error) => log_failure(error),
    }

    drop(guard);
    std::process::exit(code);
}

fn run_config_from_cli(cli: &Cli) -> RunConfig {
    let bool_parsing = match cli.bool_parsing {
        BoolParsingArg::Truthy => BoolParsing::Truthy,
        BoolParsingArg::Literal => BoolParsing::Literal,
    };
    RunConfig::new(&cli.input_file, &cli.output_file, cli.type_map.as_str())
        .with_options(GeneralizeOptions::default().with_bool_parsing(bool_parsing))
        .with_strict_type_map(cli.strict_type_map)
        .with_dry_run(cli.dry_run)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    LogConfig {
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        ..LogConfig::default()
    }
    .with_level(level_filter)
    .with_format(format)
    .with_log_file(cli.log_file.clone())
    .with_ansi(with_ansi)
}
