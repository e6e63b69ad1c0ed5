//! Application services.

mod materializer;

pub use materializer::{MaterializeSummary, Materializer};
