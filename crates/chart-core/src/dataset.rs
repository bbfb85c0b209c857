// File: crates/chart-core/src/dataset.rs
// Summary: Server payloads for histogram (bar) and time-series (line) charts.
// Notes:
// - Missing fields fall back to defaults instead of failing deserialization;
//   nothing here validates that shapes line up.

use serde::{Deserialize, Serialize};

/// Axis title text for X and Y.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

/// One bar series: a value per category key of the enclosing response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramDataset {
    pub label: String,
    pub data_points: Vec<f64>,
}

/// Categorical payload: keys along X, one or more datasets, axis titles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramResponse {
    pub keys: Vec<String>,
    pub datasets: Vec<HistogramDataset>,
    #[serde(alias = "label")]
    pub labels: AxisLabels,
}

impl HistogramResponse {
    /// Labels of datasets whose value count differs from the key count.
    pub fn mismatched_datasets(&self) -> Vec<&str> {
        self.datasets
            .iter()
            .filter(|d| d.data_points.len() != self.keys.len())
            .map(|d| d.label.as_str())
            .collect()
    }
}

/// One timestamped point carrying its own rendering color.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesEntry {
    pub date: String,
    pub value: f64,
    pub color: String,
}

impl TimeSeriesEntry {
    pub fn new(date: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self { date: date.into(), value, color: color.into() }
    }
}

/// One line series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesDataset {
    pub label: String,
    /// Whole-series color, used when the renderer asks for a dataset-level color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data_points: Vec<TimeSeriesEntry>,
}

/// Temporal payload: datasets plus axis titles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesResponse {
    pub datasets: Vec<TimeSeriesDataset>,
    pub labels: AxisLabels,
}
