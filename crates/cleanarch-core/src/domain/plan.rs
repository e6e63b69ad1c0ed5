use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::content::ContentOverride;
use super::layout::LayoutDescriptor;
use super::project_name::ProjectName;

/// Ordered list of filesystem entries for one project, ready to apply.
///
/// Built from the layout, the project name and the overrides. It contains no
/// business logic, only data; the order of `entries` is the order in which
/// they are written.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ScaffoldPlan {
    /// Lay out every declared directory with its empty files, then append
    /// the overrides.
    pub fn build(
        layout: &LayoutDescriptor,
        name: &ProjectName,
        parent: &Path,
        overrides: &[ContentOverride],
    ) -> Self {
        let mut plan = Self {
            root: name.root_in(parent),
            entries: Vec::with_capacity(
                layout.directory_count() + layout.file_count() + overrides.len(),
            ),
        };

        for entry in layout.entries() {
            let dir = entry.relative_dir();
            plan.entries.push(FsEntry::Directory(DirectoryToCreate {
                path: dir.clone(),
            }));
            for file in entry.files {
                plan.entries.push(FsEntry::File(FileToWrite {
                    path: dir.join(file),
                    content: "",
                    is_override: false,
                }));
            }
        }

        for over in overrides {
            plan.entries.push(FsEntry::File(FileToWrite {
                path: over.relative_path(),
                content: over.content,
                is_override: true,
            }));
        }

        plan
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    /// Absolute (or working-relative) location of an entry path.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            return self.root.clone();
        }
        self.root.join(relative)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Number of distinct files on disk after the plan is applied.
    ///
    /// An override whose target is also a declared file rewrites that file,
    /// so it is counted once.
    pub fn file_count(&self) -> usize {
        self.files().map(|f| &f.path).collect::<BTreeSet<_>>().len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn override_count(&self) -> usize {
        self.files().filter(|f| f.is_override).count()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

#[derive(Debug, Clone, Serialize)]
pub struct FileToWrite {
    pub path: PathBuf,
    #[serde(skip)]
    pub content: &'static str,
    pub is_override: bool,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CLEAN_ARCHITECTURE;

    fn shop_plan() -> ScaffoldPlan {
        ScaffoldPlan::build(
            &CLEAN_ARCHITECTURE,
            &ProjectName::new("Shop").unwrap(),
            Path::new(""),
            &[
                ContentOverride::entry_point("app"),
                ContentOverride::ignore_list("*.pyc\n"),
            ],
        )
    }

    #[test]
    fn plan_is_rooted_at_project_name() {
        assert_eq!(shop_plan().root(), Path::new("Shop"));
    }

    #[test]
    fn plan_counts_match_layout() {
        let plan = shop_plan();
        assert_eq!(plan.directories().count(), 15);
        assert_eq!(plan.files().count(), 22 + 2);
        assert_eq!(plan.file_count(), 22 + 1);
        assert_eq!(plan.override_count(), 2);
        assert_eq!(plan.entry_count(), 15 + 24);
    }

    #[test]
    fn directory_precedes_its_files() {
        let plan = shop_plan();
        let entries = plan.entries();
        assert!(matches!(&entries[0], FsEntry::Directory(d) if d.path == PathBuf::new()));
        assert!(matches!(&entries[1], FsEntry::File(f) if f.path == Path::new("__init__.py")));
        assert!(matches!(&entries[7], FsEntry::Directory(d) if d.path == Path::new("src")));
    }

    #[test]
    fn overrides_come_last() {
        let plan = shop_plan();
        let tail: Vec<_> = plan.files().collect::<Vec<_>>().into_iter().rev().take(2).collect();
        assert_eq!(tail[0].path, PathBuf::from(".gitignore"));
        assert_eq!(tail[0].content, "*.pyc\n");
        assert_eq!(tail[1].path, PathBuf::from("src").join("main.py"));
        assert_eq!(tail[1].content, "app");
    }

    #[test]
    fn file_count_ignores_rewrites_of_declared_files() {
        let without_overrides = ScaffoldPlan::build(
            &CLEAN_ARCHITECTURE,
            &ProjectName::new("Shop").unwrap(),
            Path::new(""),
            &[],
        );
        assert_eq!(without_overrides.file_count(), 22);
        assert_eq!(
            shop_plan().file_count(),
            without_overrides.file_count() + 1
        );
    }

    #[test]
    fn declared_files_are_empty() {
        let plan = shop_plan();
        assert!(plan.files().filter(|f| !f.is_override).all(FileToWrite::is_empty));
    }

    #[test]
    fn resolve_joins_under_root() {
        let plan = shop_plan();
        assert_eq!(
            plan.resolve(Path::new("src")),
            PathBuf::from("Shop").join("src")
        );
    }
}
