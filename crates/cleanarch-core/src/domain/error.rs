use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any filesystem call is made.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Layout directory '{directory}' has no declared parent")]
    OrphanDirectory { directory: String },

    #[error("Layout file name '{file}' in '{directory}' contains a path separator")]
    NestedFileName { directory: String, file: String },

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Content override target '{path}' is not declared in the layout")]
    UndeclaredOverride { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Pass a non-empty project name".into(),
                "Or run without a name and press Enter to use the default".into(),
            ],
            Self::OrphanDirectory { .. }
            | Self::NestedFileName { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UndeclaredOverride { .. } => vec![
                "The built-in layout is malformed".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
