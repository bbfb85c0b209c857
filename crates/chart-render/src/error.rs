// File: crates/chart-render/src/error.rs
// Summary: Pipeline-level error wrapping parameter, fetch, registry and backend failures.

use chart_core::ChartError;
use chart_fetch::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to construct chart `{id}`: {source}")]
    Construct {
        id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
