// File: crates/chart-fetch/src/lib.rs
// Summary: Dataset fetcher; POSTs to chart data endpoints and decodes their JSON payloads.

pub mod error;
pub mod fetcher;
pub mod transport;

pub use error::FetchError;
pub use fetcher::Fetcher;
pub use transport::{HttpTransport, Transport};
