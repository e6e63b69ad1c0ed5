use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::DomainError;

/// Name used when the user does not supply one.
pub const DEFAULT_PROJECT_NAME: &str = "FASTAPI_CLEANARCHITECTURE";

/// Caller-chosen project name.
///
/// Used verbatim as the root directory name. The only rule is that it is not
/// empty; characters the host filesystem rejects surface later as filesystem
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self(name))
    }

    /// Use `input` unless it is empty, in which case fall back to `default`.
    pub fn or_default(input: &str, default: &str) -> Result<Self, DomainError> {
        if input.is_empty() {
            Self::new(default)
        } else {
            Self::new(input)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Project root under `parent`.
    pub fn root_in(&self, parent: &Path) -> PathBuf {
        parent.join(&self.0)
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(ProjectName::new(""), Err(DomainError::EmptyProjectName));
    }

    #[test]
    fn name_is_kept_verbatim() {
        let name = ProjectName::new(" My Shop ").unwrap();
        assert_eq!(name.as_str(), " My Shop ");
    }

    #[test]
    fn empty_input_falls_back_to_default() {
        let name = ProjectName::or_default("", DEFAULT_PROJECT_NAME).unwrap();
        assert_eq!(name, ProjectName::default());
        assert_eq!(name.as_str(), "FASTAPI_CLEANARCHITECTURE");
    }

    #[test]
    fn non_empty_input_wins_over_default() {
        let name = ProjectName::or_default("Shop", DEFAULT_PROJECT_NAME).unwrap();
        assert_eq!(name.as_str(), "Shop");
    }

    #[test]
    fn empty_default_is_still_rejected() {
        assert!(ProjectName::or_default("", "").is_err());
    }

    #[test]
    fn root_is_joined_under_parent() {
        let name = ProjectName::new("Shop").unwrap();
        assert_eq!(name.root_in(Path::new("out")), PathBuf::from("out").join("Shop"));
    }
}
