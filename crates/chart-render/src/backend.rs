// File: crates/chart-render/src/backend.rs
// Summary: Seam to the charting library: construct a chart bound to an element id.

use chart_core::{ChartConfig, ChartHandle};

pub trait ChartBackend {
    type Handle: ChartHandle;

    /// Construct a chart for `element_id`, replacing whatever the element showed before.
    fn construct(&mut self, element_id: &str, config: ChartConfig) -> anyhow::Result<Self::Handle>;
}
