//! Conversion observers.
//!
//! The generalizer never logs on its own: it reports every conversion to
//! a [`ConversionObserver`] supplied by the caller, so embedding code
//! decides where (and whether) the records go.

use tracing::{error, info};

use crate::error::GeneralizeError;
use crate::label::TypeLabel;

/// Receives per-column conversion events.
pub trait ConversionObserver {
    /// Called after a column was cast successfully.
    fn column_converted(&self, column: &str, from: TypeLabel, to: TypeLabel);

    /// Called before a conversion failure is returned to the caller.
    fn column_failed(&self, column: &str, from: TypeLabel, to: TypeLabel, error: &GeneralizeError);
}

/// Emits conversion events as `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn column_converted(&self, column: &str, from: TypeLabel, to: TypeLabel) {
        info!(column, %from, %to, "Converted column '{column}' from {from} to {to}");
    }

    fn column_failed(&self, column: &str, from: TypeLabel, to: TypeLabel, error: &GeneralizeError) {
        error!(column, %from, %to, error = %error, "Failed to convert column '{column}' from {from} to {to}");
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {
    fn column_converted(&self, _column: &str, _from: TypeLabel, _to: TypeLabel) {}

    fn column_failed(
        &self,
        _column: &str,
        _from: TypeLabel,
        _to: TypeLabel,
        _error: &GeneralizeError,
    ) {
    }
}

impl<T: ConversionObserver + ?Sized> ConversionObserver for &T {
    fn column_converted(&self, column: &str, from: TypeLabel, to: TypeLabel) {
        (**self).column_converted(column, from, to);
    }

    fn column_failed(&self, column: &str, from: TypeLabel, to: TypeLabel, error: &GeneralizeError) {
        (**self).column_failed(column, from, to, error);
    }
}
