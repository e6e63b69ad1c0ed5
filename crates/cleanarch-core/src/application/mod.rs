//! Application layer for cleanarch.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`Materializer`])
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer drives the domain layer through the ports; the
//! layout rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{MaterializeSummary, Materializer};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
