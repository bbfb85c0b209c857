// File: crates/chart-core/src/adapter.rs
// Summary: Pure transforms from server payloads to chart configurations.

use crate::config::{
    AxisOptions, BarDataset, ChartConfig, ChartData, ChartOptions, Datasets, LineDataset,
    LinePoint, Scales, ScriptableContext, SegmentContext, SegmentOptions,
};
use crate::dataset::{AxisLabels, HistogramDataset, HistogramResponse, TimeSeriesDataset, TimeSeriesResponse};
use crate::types::{ChartKind, ScaleType, NEUTRAL_COLOR};

pub fn bar_dataset(dataset: &HistogramDataset) -> BarDataset {
    BarDataset { label: dataset.label.clone(), data: dataset.data_points.clone() }
}

pub fn bar_datasets(datasets: &[HistogramDataset]) -> Vec<BarDataset> {
    datasets.iter().map(bar_dataset).collect()
}

/// Bar chart: keys become category labels, axis titles pass through.
pub fn histogram_config(histogram: &HistogramResponse) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: Some(histogram.keys.clone()),
            datasets: Datasets::Bar(bar_datasets(&histogram.datasets)),
        },
        options: titled_options(&histogram.labels, None),
    }
}

pub fn line_dataset(dataset: &TimeSeriesDataset) -> LineDataset {
    LineDataset {
        label: dataset.label.clone(),
        color: dataset.color.clone(),
        data: dataset
            .data_points
            .iter()
            .map(|p| LinePoint { x: p.date.clone(), y: p.value, color: p.color.clone() })
            .collect(),
        segment: SegmentOptions { border_color: segment_border_color },
        border_color,
    }
}

pub fn line_datasets(datasets: &[TimeSeriesDataset]) -> Vec<LineDataset> {
    datasets.iter().map(line_dataset).collect()
}

/// Line chart over a time-scaled X axis; no category labels.
pub fn time_series_config(time_series: &TimeSeriesResponse) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: None,
            datasets: Datasets::Line(line_datasets(&time_series.datasets)),
        },
        options: titled_options(&time_series.labels, Some(ScaleType::Time)),
    }
}

/// A segment takes the color of the point it starts from.
pub fn segment_border_color<'a>(ctx: &SegmentContext<'a>) -> &'a str {
    ctx.p0.color.as_str()
}

/// Point color for `Data`, series color for `Dataset`, neutral otherwise.
pub fn border_color<'a>(ctx: &ScriptableContext<'a>) -> &'a str {
    match *ctx {
        ScriptableContext::Data { dataset, data_index } => dataset
            .data
            .get(data_index)
            .map(|p| p.color.as_str())
            .unwrap_or(NEUTRAL_COLOR),
        ScriptableContext::Dataset { dataset } => dataset.color.as_deref().unwrap_or(NEUTRAL_COLOR),
        ScriptableContext::Other { .. } => NEUTRAL_COLOR,
    }
}

fn titled_options(labels: &AxisLabels, x_scale: Option<ScaleType>) -> ChartOptions {
    let mut x_axes = AxisOptions::titled(labels.x.clone());
    if let Some(scale_type) = x_scale {
        x_axes = x_axes.with_scale_type(scale_type);
    }
    ChartOptions { scales: Scales { x_axes, y: AxisOptions::titled(labels.y.clone()) } }
}
