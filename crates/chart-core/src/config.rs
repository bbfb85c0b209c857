// File: crates/chart-core/src/config.rs
// Summary: Chart configuration in the shape the rendering library consumes (type/data/options).
// Notes:
// - Serializes to the library's JSON form. Coloring callbacks are function
//   pointers and are not serialized.

use serde::Serialize;

use crate::types::{ChartKind, ScaleType};

/// Resolves a line segment's color from its endpoints.
pub type SegmentColorFn = for<'a> fn(&SegmentContext<'a>) -> &'a str;
/// Resolves a point's or a whole dataset's color from the rendering context.
pub type BorderColorFn = for<'a> fn(&ScriptableContext<'a>) -> &'a str;

#[derive(Clone, Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    /// Category labels; bar charts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub datasets: Datasets,
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Datasets {
    Bar(Vec<BarDataset>),
    Line(Vec<LineDataset>),
}

impl Datasets {
    pub fn len(&self) -> usize {
        match self {
            Datasets::Bar(d) => d.len(),
            Datasets::Line(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Parsed point as the library stores it (`raw` in callback contexts).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: String,
    pub y: f64,
    pub color: String,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SegmentOptions {
    #[serde(skip)]
    pub border_color: SegmentColorFn,
}

#[derive(Clone, Debug, Serialize)]
pub struct LineDataset {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: Vec<LinePoint>,
    pub segment: SegmentOptions,
    #[serde(skip)]
    pub border_color: BorderColorFn,
}

impl LineDataset {
    /// Color for the segment between points `i` and `i + 1`, if both exist.
    pub fn segment_color(&self, i: usize) -> Option<&str> {
        let p0 = self.data.get(i)?;
        let p1 = self.data.get(i + 1)?;
        let ctx = SegmentContext { p0, p1, p0_data_index: i, p1_data_index: i + 1 };
        Some((self.segment.border_color)(&ctx))
    }

    /// Color for the point at `data_index`.
    pub fn point_color(&self, data_index: usize) -> &str {
        (self.border_color)(&ScriptableContext::Data { dataset: self, data_index })
    }

    /// Color for the dataset as a whole (legend, tooltips).
    pub fn dataset_color(&self) -> &str {
        (self.border_color)(&ScriptableContext::Dataset { dataset: self })
    }
}

/// Context for a segment callback: the two raw points it joins.
#[derive(Clone, Copy, Debug)]
pub struct SegmentContext<'a> {
    pub p0: &'a LinePoint,
    pub p1: &'a LinePoint,
    pub p0_data_index: usize,
    pub p1_data_index: usize,
}

/// Context for a scriptable option, discriminated by what is being drawn.
#[derive(Clone, Copy, Debug)]
pub enum ScriptableContext<'a> {
    Data { dataset: &'a LineDataset, data_index: usize },
    Dataset { dataset: &'a LineDataset },
    /// Any other context kind the library reports (`chart`, `scale`, `tick`, ...).
    Other { kind: &'a str },
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Scales {
    #[serde(rename = "xAxes")]
    pub x_axes: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AxisOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    pub title: AxisTitle,
}

impl AxisOptions {
    pub fn titled(text: impl Into<String>) -> Self {
        Self { scale_type: None, title: AxisTitle { display: true, text: text.into() } }
    }

    pub fn with_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = Some(scale_type);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}
