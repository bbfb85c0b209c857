// File: crates/chart-render/src/lib.rs
// Summary: Chart renderer; binds fetched, adapted datasets to chart backends and the registry.

pub mod backend;
pub mod error;
pub mod json;
pub mod renderer;

pub use backend::ChartBackend;
pub use error::RenderError;
pub use json::{JsonBackend, JsonChart};
pub use renderer::{Renderer, ScriptKind};
