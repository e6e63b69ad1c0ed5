//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use cleanarch_core::{
    application::{ApplicationError, error::FsOperation, ports::Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "mkdir -p");
        std::fs::create_dir_all(path)
            .map_err(|e| map_io_error(path, e, FsOperation::CreateDirectory))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, FsOperation::WriteFile))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: FsOperation) -> ScaffoldError {
    ApplicationError::from_io(path, operation, &e).into()
}
