// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for parameter lookup and registry operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A required activation parameter was absent from the script locator.
    #[error("missing activation parameter `{0}`")]
    MissingParameter(&'static str),

    /// `update` was called for an element id that never had a chart registered.
    #[error("no chart with id `{0}`")]
    NotRegistered(String),

    /// The chart handle failed to redraw.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
