// File: crates/demo/src/main.rs
// Summary: CLI that activates one chart script from its locator and writes chart configs as JSON.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::ChartRegistry;
use chart_render::{JsonBackend, Renderer, ScriptKind};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "chart-pipeline", version, about = "Fetch chart datasets and build chart configurations")]
struct Cli {
    /// Script locator carrying the activation parameters,
    /// e.g. `time-series-chart.js?endpoint=http://localhost:8000/fetch_emissions/1&id=emissions`
    locator: String,

    /// histogram | histograms | time-series | refresh
    #[arg(short, long, env = "CHART_KIND", default_value = "histogram")]
    kind: ScriptKind,

    /// Directory receiving one `<id>.json` per constructed chart
    #[arg(short, long, env = "CHART_OUT_DIR", default_value = "target/out")]
    out: PathBuf,

    /// After a time-series render, refetch once and update the chart in place
    #[arg(long)]
    refresh: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chart_pipeline=info,chart_render=info,chart_fetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.refresh && cli.kind != ScriptKind::TimeSeries {
        anyhow::bail!("--refresh only applies to --kind time-series");
    }

    let mut renderer = Renderer::http(JsonBackend::new(&cli.out));
    let mut registry = ChartRegistry::new();

    renderer.activate(cli.kind, &cli.locator, &mut registry).await?;
    if cli.refresh {
        renderer.activate(ScriptKind::Refresh, &cli.locator, &mut registry).await?;
    }

    for id in registry.ids() {
        if let Some(chart) = registry.get(id) {
            info!(id, path = %chart.path().display(), redraws = chart.redraws(), "wrote chart");
        }
    }
    println!("Wrote {} chart(s) to {}", registry.len(), renderer.backend().out_dir().display());
    Ok(())
}
