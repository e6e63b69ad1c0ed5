//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cleanarch_adapters::filesystem::LocalFilesystem` (production)
/// - `cleanarch_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations report failures as
/// [`ApplicationError`](crate::application::ApplicationError) values that
/// carry the path and the operation.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents.
    ///
    /// An existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
