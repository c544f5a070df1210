//! CLI argument definitions for the type generalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dtgen",
    version,
    about = "Generalizes data types in a CSV file (e.g., integers to floats).",
    long_about = "Generalizes data types in a CSV file (e.g., integers to floats).\n\n\
                  Every column is classified as int, float, str, bool or object; columns whose\n\
                  type appears in --type_map are converted to the mapped type.\n\n\
                  Examples:\n  \
                  dtgen input.csv output.csv --type_map \"int:float\"\n  \
                  dtgen input.csv output.csv --type_map \"int:str,bool:float\""
)]
pub struct Cli {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Path to the output CSV file.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Type conversions as 'old_type:new_type[,old_type:new_type,...]'.
    ///
    /// Supported types: int, float, str, bool, object.
    #[arg(long = "type_map", visible_alias = "type-map", value_name = "MAP")]
    pub type_map: String,

    /// How text is converted to bool.
    ///
    /// `truthy` treats any non-empty text as true ("False" included);
    /// `literal` accepts only true/false (case-insensitive).
    #[arg(long = "bool-parsing", value_enum, default_value = "truthy")]
    pub bool_parsing: BoolParsingArg,

    /// Fail when the type map lists the same source type twice.
    #[arg(long = "strict-type-map")]
    pub strict_type_map: bool,

    /// Generalize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print a per-column summary to stdout after a successful run.
    #[arg(long = "summary", value_enum, value_name = "FORMAT")]
    pub summary: Option<SummaryFormatArg>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BoolParsingArg {
    Truthy,
    Literal,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
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
