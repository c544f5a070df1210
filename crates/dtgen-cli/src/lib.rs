//! CLI library components for the column type generalizer.

pub mod logging;
pub mod pipeline;
pub mod summary;
