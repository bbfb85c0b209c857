// File: crates/chart-core/src/types.rs
// Summary: Shared constants (parameter keys, neutral color, chart kinds).

use serde::Serialize;

/// Parameter naming a single dataset endpoint.
pub const PARAM_ENDPOINT: &str = "endpoint";
/// Parameter naming a comma-separated list of dataset endpoints.
pub const PARAM_ENDPOINTS: &str = "endpoints";
/// Parameter naming the DOM element the chart binds to.
pub const PARAM_ID: &str = "id";

/// Color used when a coloring callback cannot resolve a color from its context.
pub const NEUTRAL_COLOR: &str = "black";

/// Chart type understood by the rendering library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Axis scale type; only set when the library default (category/linear) is not wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Time,
}
