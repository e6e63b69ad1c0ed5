//! The layout descriptor: which directories a skeleton has and which files
//! each one holds.
//!
//! Directory paths are written with `/` between segments and relative to the
//! project root; the root itself is the empty string. They are converted into
//! platform paths one segment at a time with [`Path::join`], so the static
//! table never has to know the host separator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::DomainError;

/// One directory of the skeleton and the files created inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Directory relative to the project root, `/`-separated. `""` is the root.
    pub directory: &'static str,
    /// Plain file names, created empty, in this order.
    pub files: &'static [&'static str],
}

impl LayoutEntry {
    pub const fn new(directory: &'static str, files: &'static [&'static str]) -> Self {
        Self { directory, files }
    }

    /// Segments of the directory path. Empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        split_segments(self.directory)
    }

    /// Directory as a platform path relative to the project root.
    pub fn relative_dir(&self) -> PathBuf {
        join_segments(Path::new(""), self.directory)
    }

    pub fn is_root(&self) -> bool {
        self.segments().next().is_none()
    }
}

/// Ordered, immutable description of a project skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    entries: &'static [LayoutEntry],
}

impl LayoutDescriptor {
    pub const fn new(entries: &'static [LayoutEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [LayoutEntry] {
        self.entries
    }

    pub fn directory_count(&self) -> usize {
        self.entries.len()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum()
    }

    /// Every declared file as a path relative to the project root, in
    /// declaration order.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries.iter().flat_map(|entry| {
            let dir = entry.relative_dir();
            entry.files.iter().map(move |f| dir.join(f))
        })
    }

    /// Whether `directory` (`/`-separated, relative) is declared.
    pub fn declares_directory(&self, directory: &str) -> bool {
        let wanted: Vec<_> = split_segments(directory).collect();
        self.entries
            .iter()
            .any(|e| e.segments().eq(wanted.iter().copied()))
    }

    /// Check the structural invariants of the table.
    ///
    /// Every directory must be the root or the child of a directory declared
    /// before it, file names must be plain names, and no path may repeat.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen_dirs: HashSet<Vec<&str>> = HashSet::new();

        for entry in self.entries {
            if entry.directory.starts_with('/') || entry.directory.starts_with('\\') {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: entry.directory.to_string(),
                });
            }

            let trimmed = entry.directory.trim_end_matches('/');
            if !trimmed.is_empty() && trimmed.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
                return Err(DomainError::OrphanDirectory {
                    directory: entry.directory.to_string(),
                });
            }

            let segments: Vec<&str> = entry.segments().collect();
            if let Some((_, parent)) = segments.split_last() {
                if !seen_dirs.contains(parent) {
                    return Err(DomainError::OrphanDirectory {
                        directory: entry.directory.to_string(),
                    });
                }
            }

            if !seen_dirs.insert(segments) {
                return Err(DomainError::DuplicatePath {
                    path: entry.directory.to_string(),
                });
            }

            let mut seen_files = HashSet::new();
            for file in entry.files {
                if file.is_empty() || file.contains('/') || file.contains('\\') {
                    return Err(DomainError::NestedFileName {
                        directory: entry.directory.to_string(),
                        file: file.to_string(),
                    });
                }
                if !seen_files.insert(*file) {
                    return Err(DomainError::DuplicatePath {
                        path: format!("{}{}", entry.directory, file),
                    });
                }
            }
        }

        Ok(())
    }
}

/// The clean architecture skeleton for a FastAPI service.
pub static CLEAN_ARCHITECTURE: LayoutDescriptor = LayoutDescriptor::new(&[
    LayoutEntry::new(
        "",
        &[
            "__init__.py",
            ".env",
            "dockerfile",
            ".dockerignore",
            "README.md",
            "requirements.txt",
        ],
    ),
    LayoutEntry::new("src/", &["__init__.py", "main.py", "config.py"]),
    LayoutEntry::new("src/domain/", &["__init__.py"]),
    LayoutEntry::new("src/domain/entities/", &["__init__.py"]),
    LayoutEntry::new("src/domain/repositories/", &["__init__.py"]),
    LayoutEntry::new("src/domain/use_cases/", &["__init__.py"]),
    LayoutEntry::new("src/infrastructure/", &["__init__.py"]),
    LayoutEntry::new("src/infrastructure/database/", &["__init__.py"]),
    LayoutEntry::new("src/infrastructure/repositories/", &["__init__.py"]),
    LayoutEntry::new("src/infrastructure/logs/", &["__init__.py"]),
    LayoutEntry::new("src/presentation/", &["__init__.py"]),
    LayoutEntry::new("src/presentation/api/", &["__init__.py"]),
    LayoutEntry::new("tests/", &["__init__.py"]),
    LayoutEntry::new("tests/unitarios/", &["__init__.py"]),
    LayoutEntry::new("tests/integracion/", &["__init__.py"]),
]);

pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Append each `/`-separated segment of `relative` to `base`.
pub(crate) fn join_segments(base: &Path, relative: &str) -> PathBuf {
    split_segments(relative).fold(base.to_path_buf(), |acc, seg| acc.join(seg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layout_is_valid() {
        assert_eq!(CLEAN_ARCHITECTURE.validate(), Ok(()));
    }

    #[test]
    fn builtin_layout_counts() {
        assert_eq!(CLEAN_ARCHITECTURE.directory_count(), 15);
        assert_eq!(CLEAN_ARCHITECTURE.file_count(), 6 + 3 + 13);
    }

    #[test]
    fn root_entry_comes_first() {
        let first = CLEAN_ARCHITECTURE.entries()[0];
        assert!(first.is_root());
        assert_eq!(first.relative_dir(), PathBuf::new());
    }

    #[test]
    fn relative_dir_uses_platform_joins() {
        let entry = LayoutEntry::new("src/domain/entities/", &[]);
        let expected = PathBuf::from("src").join("domain").join("entities");
        assert_eq!(entry.relative_dir(), expected);
    }

    #[test]
    fn file_paths_follow_declaration_order() {
        let paths: Vec<_> = CLEAN_ARCHITECTURE.file_paths().collect();
        assert_eq!(paths[0], PathBuf::from("__init__.py"));
        assert_eq!(paths[6], PathBuf::from("src").join("__init__.py"));
        assert_eq!(
            paths.last().unwrap(),
            &PathBuf::from("tests").join("integracion").join("__init__.py")
        );
    }

    #[test]
    fn declares_directory_ignores_trailing_separator() {
        assert!(CLEAN_ARCHITECTURE.declares_directory("src"));
        assert!(CLEAN_ARCHITECTURE.declares_directory("src/presentation/api/"));
        assert!(CLEAN_ARCHITECTURE.declares_directory(""));
        assert!(!CLEAN_ARCHITECTURE.declares_directory("docs"));
    }

    #[test]
    fn orphan_directory_is_rejected() {
        static ORPHAN: LayoutDescriptor =
            LayoutDescriptor::new(&[LayoutEntry::new("", &[]), LayoutEntry::new("a/b/", &[])]);
        assert!(matches!(
            ORPHAN.validate(),
            Err(DomainError::OrphanDirectory { .. })
        ));
    }

    #[test]
    fn parent_must_precede_child() {
        static REVERSED: LayoutDescriptor = LayoutDescriptor::new(&[
            LayoutEntry::new("", &[]),
            LayoutEntry::new("a/b/", &[]),
            LayoutEntry::new("a/", &[]),
        ]);
        assert!(REVERSED.validate().is_err());
    }

    #[test]
    fn nested_file_name_is_rejected() {
        static NESTED: LayoutDescriptor =
            LayoutDescriptor::new(&[LayoutEntry::new("", &["src/main.py"])]);
        assert!(matches!(
            NESTED.validate(),
            Err(DomainError::NestedFileName { .. })
        ));
    }

    #[test]
    fn duplicate_directory_is_rejected() {
        static DUP: LayoutDescriptor = LayoutDescriptor::new(&[
            LayoutEntry::new("", &[]),
            LayoutEntry::new("src/", &[]),
            LayoutEntry::new("src", &[]),
        ]);
        assert!(matches!(DUP.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_directory_is_rejected() {
        static ABS: LayoutDescriptor = LayoutDescriptor::new(&[LayoutEntry::new("/etc/", &[])]);
        assert!(matches!(
            ABS.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        static UP: LayoutDescriptor =
            LayoutDescriptor::new(&[LayoutEntry::new("", &[]), LayoutEntry::new("../", &[])]);
        assert!(UP.validate().is_err());
    }
}
