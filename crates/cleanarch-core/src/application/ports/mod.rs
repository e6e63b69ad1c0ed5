//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cleanarch-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `Filesystem`: directory and file creation
//!
//! - **Driving (Input) Ports**: the CLI calls [`crate::application::Materializer`]
//!   directly

pub mod output;

pub use output::Filesystem;
