//! The generalization run: check input, parse map, load, generalize, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use dtgen_core::{
    GeneralizeError, GeneralizeOptions, GeneralizeReport, TracingObserver, TypeMap, TypeMapError,
    generalize,
};
use dtgen_io::{IoError, ensure_input_exists, read_csv_table, write_csv_table};

/// Everything a single run needs, independent of how it was configured.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Raw `old:new[,old:new...]` string.
    pub type_map: String,
    /// Reject repeated source types instead of keeping the last one.
    pub strict_type_map: bool,
    pub options: GeneralizeOptions,
    /// Generalize and report without writing the output file.
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        type_map: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            type_map: type_map.into(),
            strict_type_map: false,
            options: GeneralizeOptions::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: GeneralizeOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_strict_type_map(mut self, strict: bool) -> Self {
        self.strict_type_map = strict;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub report: GeneralizeReport,
}

/// Broad failure categories, used to choose how a failure is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InputNotFound,
    TypeMap,
    Conversion,
    Unexpected,
}

/// Run one generalization.
///
/// The input path is checked before the type map is parsed, and the type
/// map is parsed before any table I/O. Nothing is written unless every
/// column converted.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let span = info_span!("generalize", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    ensure_input_exists(&config.input)?;

    let type_map = parse_type_map(&config.type_map, config.strict_type_map)?;
    for label in type_map.overridden() {
        warn!(source = %label, "type map lists '{label}' more than once; the last mapping wins");
    }

    let table = read_csv_table(&config.input)
        .with_context(|| format!("load {}", config.input.display()))?;
    let rows = table.height();

    let generalized = generalize(table, &type_map, &config.options, &TracingObserver)?;
    let mut table = generalized.table;

    let output = if config.dry_run {
        info!(
            converted = generalized.report.converted_count(),
            "dry run: output not written"
        );
        None
    } else {
        write_csv_table(&mut table, &config.output)
            .with_context(|| format!("write {}", config.output.display()))?;
        info!(
            output = %config.output.display(),
            rows,
            converted = generalized.report.converted_count(),
            duration_ms = start.elapsed().as_millis(),
            "Successfully generalized data types and saved to {}",
            config.output.display()
        );
        Some(config.output.clone())
    };

    Ok(RunOutcome {
        input: config.input.clone(),
        output,
        rows,
        report: generalized.report,
    })
}

fn parse_type_map(input: &str, strict: bool) -> Result<TypeMap, TypeMapError> {
    let parsed = if strict {
        TypeMap::parse_strict(input)
    } else {
        TypeMap::parse(input)
    };
    parsed.inspect_err(|e| error!(type_map = %input, "Error parsing type map: {e}"))
}

/// Classify a run failure by the first recognized error in its chain.
pub fn failure_kind(error: &anyhow::Error) -> FailureKind {
    for cause in error.chain() {
        if let Some(IoError::FileNotFound { .. }) = cause.downcast_ref::<IoError>() {
            return FailureKind::InputNotFound;
        }
        if cause.downcast_ref::<TypeMapError>().is_some() {
            return FailureKind::TypeMap;
        }
        if let Some(GeneralizeError::Conversion { .. }) = cause.downcast_ref::<GeneralizeError>() {
            return FailureKind::Conversion;
        }
    }
    FailureKind::Unexpected
}

/// Log a run failure; unexpected failures get the full error chain.
pub fn log_failure(error: &anyhow::Error) {
    match failure_kind(error) {
        FailureKind::InputNotFound => error!("{error}"),
        FailureKind::TypeMap | FailureKind::Conversion => error!("ValueError: {error}"),
        FailureKind::Unexpected => error!("An unexpected error occurred: {error:?}"),
    }
}

/// Process exit code for a run result.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    if result.is_ok() { 0 } else { 1 }
}
