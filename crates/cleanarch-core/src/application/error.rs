//! Application layer errors.
//!
//! These errors represent failures while applying a plan, not layout rule
//! violations. Those are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Filesystem step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateDirectory,
    WriteFile,
}

impl std::fmt::Display for FsOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDirectory => write!(f, "create directory"),
            Self::WriteFile => write!(f, "write file"),
        }
    }
}

/// Errors that occur while materializing a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The path is illegal for the host filesystem, or a non-directory sits
    /// where a directory is expected.
    #[error("Invalid path {path}: failed to {operation}: {reason}")]
    InvalidPath {
        path: PathBuf,
        operation: FsOperation,
        reason: String,
    },

    /// The process may not create entries at this location.
    #[error("Permission denied at {path}: failed to {operation}")]
    PermissionDenied { path: PathBuf, operation: FsOperation },

    /// Any other filesystem failure.
    #[error("Filesystem error at {path}: failed to {operation}: {reason}")]
    FilesystemError {
        path: PathBuf,
        operation: FsOperation,
        reason: String,
    },

    /// Adapter state could not be accessed (lock poisoned).
    #[error("Filesystem adapter state is unavailable")]
    AdapterLockError,
}

impl ApplicationError {
    /// Classify an I/O error raised while running `operation` on `path`.
    pub fn from_io(path: impl Into<PathBuf>, operation: FsOperation, err: &io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied { path, operation }
            }
            io::ErrorKind::InvalidInput
            | io::ErrorKind::AlreadyExists
            | io::ErrorKind::NotADirectory
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::NotFound => Self::InvalidPath {
                path,
                operation,
                reason: err.to_string(),
            },
            _ => Self::FilesystemError {
                path,
                operation,
                reason: err.to_string(),
            },
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPath { path, .. } => vec![
                format!("Cannot use: {}", path.display()),
                "Check the project name for characters your filesystem rejects".into(),
                "Make sure no file already sits where a directory is expected".into(),
            ],
            Self::PermissionDenied { path, .. } => vec![
                format!("No write access to: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run from a directory you own, or pass --output".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check available disk space".into(),
            ],
            Self::AdapterLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPath { .. } => ErrorCategory::Validation,
            Self::PermissionDenied { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Filesystem
            }
            Self::AdapterLockError => ErrorCategory::Internal,
        }
    }
}
