// File: crates/chart-render/src/renderer.rs
// Summary: Orchestrates one chart pipeline: parameters -> fetch -> adapt -> construct or update.
// Notes:
// - The registry is passed in by the caller; the renderer keeps no chart state.
// - Several histograms bound to one id overwrite each other; the last one stays registered.

use std::fmt;
use std::str::FromStr;

use chart_core::types::{PARAM_ENDPOINT, PARAM_ENDPOINTS, PARAM_ID};
use chart_core::{
    histogram_config, time_series_config, ChartConfig, ChartError, ChartRegistry,
    HistogramResponse, ScriptParams, TimeSeriesResponse,
};
use chart_fetch::{Fetcher, HttpTransport, Transport};
use tracing::{error, info, warn};

use crate::backend::ChartBackend;
use crate::error::{RenderError, Result};

/// Which dashboard script is being activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptKind {
    /// `endpoint` + `id`: one bar chart.
    Histogram,
    /// `endpoints` + `id`: one bar chart per endpoint, all bound to `id`.
    Histograms,
    /// `endpoint` + `id`: one time-scaled line chart.
    TimeSeries,
    /// `endpoint` + `id`: refetch and update an already registered line chart.
    Refresh,
}

impl ScriptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptKind::Histogram => "histogram",
            ScriptKind::Histograms => "histograms",
            ScriptKind::TimeSeries => "time-series",
            ScriptKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ScriptKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "histogram" | "bar" => Ok(ScriptKind::Histogram),
            "histograms" => Ok(ScriptKind::Histograms),
            "time-series" | "timeseries" | "line" => Ok(ScriptKind::TimeSeries),
            "refresh" | "update" => Ok(ScriptKind::Refresh),
            other => Err(format!("unknown chart script `{other}`")),
        }
    }
}

pub struct Renderer<B, T = HttpTransport> {
    backend: B,
    fetcher: Fetcher<T>,
}

impl<B: ChartBackend> Renderer<B, HttpTransport> {
    pub fn http(backend: B) -> Self { Self::new(backend, Fetcher::http()) }
}

impl<B: ChartBackend, T: Transport> Renderer<B, T> {
    pub fn new(backend: B, fetcher: Fetcher<T>) -> Self { Self { backend, fetcher } }

    pub fn backend(&self) -> &B { &self.backend }
    pub fn fetcher(&self) -> &Fetcher<T> { &self.fetcher }

    /// Decode `locator` and run the pipeline for `kind`. Failures are logged here
    /// and returned to the caller.
    pub async fn activate(
        &mut self,
        kind: ScriptKind,
        locator: &str,
        registry: &mut ChartRegistry<B::Handle>,
    ) -> Result<()> {
        let params = ScriptParams::parse(locator);
        let result = match kind {
            ScriptKind::Histogram => self.render_histogram(&params, registry).await,
            ScriptKind::Histograms => self.render_histograms(&params, registry).await.map(drop),
            ScriptKind::TimeSeries => self.render_time_series(&params, registry).await,
            ScriptKind::Refresh => self.refresh_time_series(&params, registry).await,
        };
        if let Err(e) = &result {
            error!(script = %kind, locator, error = %e, "chart pipeline failed");
        }
        result
    }

    pub async fn render_histogram(
        &mut self,
        params: &ScriptParams,
        registry: &mut ChartRegistry<B::Handle>,
    ) -> Result<()> {
        let endpoint = params.require(PARAM_ENDPOINT)?;
        let id = params.require(PARAM_ID)?;
        let histogram: HistogramResponse = self.fetcher.fetch_one(endpoint).await?;
        warn_mismatch(endpoint, &histogram);
        self.mount(id, histogram_config(&histogram), registry)
    }

    /// Returns how many charts were constructed.
    pub async fn render_histograms(
        &mut self,
        params: &ScriptParams,
        registry: &mut ChartRegistry<B::Handle>,
    ) -> Result<usize> {
        let endpoints = params.endpoints();
        if endpoints.is_empty() {
            return Err(ChartError::MissingParameter(PARAM_ENDPOINTS).into());
        }
        let id = params.require(PARAM_ID)?;
        let histograms: Vec<HistogramResponse> = self.fetcher.fetch_all(&endpoints).await?;
        for (endpoint, histogram) in endpoints.iter().zip(&histograms) {
            warn_mismatch(endpoint, histogram);
            self.mount(id, histogram_config(histogram), registry)?;
        }
        Ok(histograms.len())
    }

    pub async fn render_time_series(
        &mut self,
        params: &ScriptParams,
        registry: &mut ChartRegistry<B::Handle>,
    ) -> Result<()> {
        let endpoint = params.require(PARAM_ENDPOINT)?;
        let id = params.require(PARAM_ID)?;
        let time_series: TimeSeriesResponse = self.fetcher.fetch_one(endpoint).await?;
        self.mount(id, time_series_config(&time_series), registry)
    }

    /// Refetch `endpoint` and swap the datasets of the line chart bound to `id`.
    pub async fn refresh_time_series(
        &mut self,
        params: &ScriptParams,
        registry: &mut ChartRegistry<B::Handle>,
    ) -> Result<()> {
        let endpoint = params.require(PARAM_ENDPOINT)?;
        let id = params.require(PARAM_ID)?;
        let time_series: TimeSeriesResponse = self.fetcher.fetch_one(endpoint).await?;
        registry.update(id, &time_series.datasets)?;
        Ok(())
    }

    fn mount(&mut self, id: &str, config: ChartConfig, registry: &mut ChartRegistry<B::Handle>) -> Result<()> {
        let kind = config.kind;
        let datasets = config.data.datasets.len();
        let chart = self
            .backend
            .construct(id, config)
            .map_err(|e| RenderError::Construct { id: id.to_owned(), source: e.into() })?;
        if registry.register(id, chart).is_some() {
            warn!(id, "replaced chart already bound to element");
        }
        info!(id, ?kind, datasets, "chart constructed");
        Ok(())
    }
}

fn warn_mismatch(endpoint: &str, histogram: &HistogramResponse) {
    let mismatched = histogram.mismatched_datasets();
    if !mismatched.is_empty() {
        warn!(endpoint, keys = histogram.keys.len(), ?mismatched, "dataset lengths differ from key count");
    }
}
