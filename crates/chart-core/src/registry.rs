// File: crates/chart-core/src/registry.rs
// Summary: Chart handle trait and the per-session registry mapping element ids to live charts.
// Notes:
// - Entries are never removed; a chart whose element disappears stays registered.

use std::collections::HashMap;

use tracing::{error, info};

use crate::adapter::line_datasets;
use crate::config::{ChartConfig, Datasets};
use crate::dataset::TimeSeriesDataset;
use crate::error::{ChartError, Result};

/// A chart constructed by the rendering backend and bound to one element.
pub trait ChartHandle {
    fn config(&self) -> &ChartConfig;
    fn config_mut(&mut self) -> &mut ChartConfig;
    /// Redraw after the configuration was mutated in place.
    fn update(&mut self) -> anyhow::Result<()>;
}

/// Element id -> chart currently bound there. Owned by whoever drives the page.
pub struct ChartRegistry<H> {
    charts: HashMap<String, H>,
}

impl<H> Default for ChartRegistry<H> {
    fn default() -> Self { Self { charts: HashMap::new() } }
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self { Self::default() }

    /// Bind `chart` to `id`, returning whatever was bound there before.
    pub fn register(&mut self, id: impl Into<String>, chart: H) -> Option<H> {
        self.charts.insert(id.into(), chart)
    }

    pub fn get(&self, id: &str) -> Option<&H> { self.charts.get(id) }
    pub fn get_mut(&mut self, id: &str) -> Option<&mut H> { self.charts.get_mut(id) }
    pub fn contains(&self, id: &str) -> bool { self.charts.contains_key(id) }
    pub fn len(&self) -> usize { self.charts.len() }
    pub fn is_empty(&self) -> bool { self.charts.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    /// Replace the datasets of the chart bound to `id` and redraw it.
    pub fn update(&mut self, id: &str, datasets: &[TimeSeriesDataset]) -> Result<()> {
        let Some(chart) = self.charts.get_mut(id) else {
            error!(id, "no chart with id");
            return Err(ChartError::NotRegistered(id.to_owned()));
        };
        chart.config_mut().data.datasets = Datasets::Line(line_datasets(datasets));
        chart.update()?;
        info!(id, datasets = datasets.len(), "chart updated");
        Ok(())
    }
}
