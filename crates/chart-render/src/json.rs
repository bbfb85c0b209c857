// File: crates/chart-render/src/json.rs
// Summary: Headless backend writing each chart's configuration to `<out_dir>/<element id>.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{ChartConfig, ChartHandle};
use tracing::debug;

use crate::backend::ChartBackend;

pub struct JsonBackend {
    out_dir: PathBuf,
}

impl JsonBackend {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn out_dir(&self) -> &Path { &self.out_dir }
}

impl ChartBackend for JsonBackend {
    type Handle = JsonChart;

    fn construct(&mut self, element_id: &str, config: ChartConfig) -> Result<JsonChart> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;
        let mut chart = JsonChart {
            path: self.out_dir.join(format!("{element_id}.json")),
            config,
            redraws: 0,
        };
        chart.write()?;
        Ok(chart)
    }
}

/// A chart "drawn" by serializing its configuration.
pub struct JsonChart {
    path: PathBuf,
    config: ChartConfig,
    redraws: usize,
}

impl JsonChart {
    pub fn path(&self) -> &Path { &self.path }

    /// Number of writes, including the initial one.
    pub fn redraws(&self) -> usize { self.redraws }

    fn write(&mut self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.config)?;
        std::fs::write(&self.path, bytes).with_context(|| format!("writing {}", self.path.display()))?;
        self.redraws += 1;
        debug!(path = %self.path.display(), redraws = self.redraws, "chart config written");
        Ok(())
    }
}

impl ChartHandle for JsonChart {
    fn config(&self) -> &ChartConfig { &self.config }
    fn config_mut(&mut self) -> &mut ChartConfig { &mut self.config }
    fn update(&mut self) -> Result<()> { self.write() }
}
