use std::path::PathBuf;

use super::error::DomainError;
use super::layout::{LayoutDescriptor, join_segments, split_segments};

/// Target of the application entry-point blob.
pub const ENTRY_POINT_PATH: &str = "src/main.py";

/// Target of the version-control ignore-list blob.
pub const IGNORE_LIST_PATH: &str = ".gitignore";

/// A generated file whose content is a supplied blob instead of nothing.
///
/// The blob is opaque: it is written byte-for-byte, with no substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentOverride {
    /// File path relative to the project root, `/`-separated.
    pub path: &'static str,
    pub content: &'static str,
}

impl ContentOverride {
    pub const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }

    pub const fn entry_point(content: &'static str) -> Self {
        Self::new(ENTRY_POINT_PATH, content)
    }

    pub const fn ignore_list(content: &'static str) -> Self {
        Self::new(IGNORE_LIST_PATH, content)
    }

    /// Target as a platform path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        join_segments(std::path::Path::new(""), self.path)
    }

    /// The target must be a plain file inside a directory the layout declares.
    pub fn validate_against(&self, layout: &LayoutDescriptor) -> Result<(), DomainError> {
        if self.path.starts_with('/') || self.path.starts_with('\\') {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: self.path.to_string(),
            });
        }

        let segments: Vec<&str> = split_segments(self.path).collect();
        let Some((file, parent)) = segments.split_last() else {
            return Err(DomainError::UndeclaredOverride {
                path: self.path.to_string(),
            });
        };

        if file.contains('\\') || !layout.declares_directory(&parent.join("/")) {
            return Err(DomainError::UndeclaredOverride {
                path: self.path.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CLEAN_ARCHITECTURE;

    #[test]
    fn builtin_targets_are_declared() {
        assert!(
            ContentOverride::entry_point("x")
                .validate_against(&CLEAN_ARCHITECTURE)
                .is_ok()
        );
        assert!(
            ContentOverride::ignore_list("x")
                .validate_against(&CLEAN_ARCHITECTURE)
                .is_ok()
        );
    }

    #[test]
    fn target_outside_layout_is_rejected() {
        let over = ContentOverride::new("docs/index.md", "");
        assert_eq!(
            over.validate_against(&CLEAN_ARCHITECTURE),
            Err(DomainError::UndeclaredOverride {
                path: "docs/index.md".into()
            })
        );
    }

    #[test]
    fn absolute_target_is_rejected() {
        let over = ContentOverride::new("/etc/passwd", "");
        assert!(matches!(
            over.validate_against(&CLEAN_ARCHITECTURE),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn relative_path_is_joined_per_segment() {
        let over = ContentOverride::entry_point("");
        assert_eq!(over.relative_path(), PathBuf::from("src").join("main.py"));
    }
}
