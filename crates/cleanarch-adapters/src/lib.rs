//! Infrastructure adapters for cleanarch.
//!
//! This crate implements the ports defined in `cleanarch-core::application::ports`
//! and ships the content blobs written into every generated project.

pub mod builtin_content;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_content::builtin_overrides;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
