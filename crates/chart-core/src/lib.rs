// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; activation parameters, payload model, shape adapters, registry.

pub mod adapter;
pub mod config;
pub mod dataset;
pub mod error;
pub mod params;
pub mod registry;
pub mod types;

pub use adapter::{histogram_config, line_dataset, line_datasets, time_series_config};
pub use config::{ChartConfig, Datasets, LineDataset, ScriptableContext, SegmentContext};
pub use dataset::{AxisLabels, HistogramDataset, HistogramResponse, TimeSeriesDataset, TimeSeriesEntry, TimeSeriesResponse};
pub use error::ChartError;
pub use params::ScriptParams;
pub use registry::{ChartHandle, ChartRegistry};
pub use types::{ChartKind, NEUTRAL_COLOR};
