//! Core domain layer for cleanarch.
//!
//! Pure data and rules: what a clean architecture skeleton looks like, what
//! a project name is, and how the two pieces combine into an ordered plan of
//! filesystem entries.
//!
//! - **No I/O**: nothing here touches the filesystem
//! - **No external crates**: only std, `thiserror` and `serde` derives
//! - **Static layout**: the descriptor is a compile-time constant

pub mod content;
pub mod error;
pub mod layout;
pub mod plan;
pub mod project_name;

pub use content::{ContentOverride, ENTRY_POINT_PATH, IGNORE_LIST_PATH};
pub use error::{DomainError, ErrorCategory};
pub use layout::{CLEAN_ARCHITECTURE, LayoutDescriptor, LayoutEntry};
pub use plan::{DirectoryToCreate, FileToWrite, FsEntry, ScaffoldPlan};
pub use project_name::{DEFAULT_PROJECT_NAME, ProjectName};
