//! Materializer - turns the layout descriptor into filesystem entries.
//!
//! One linear pass:
//! 1. Build the plan for the project root
//! 2. Create each directory, then its files (empty, truncating)
//! 3. Write the content overrides
//!
//! The first failing call aborts the run. Entries written before it stay on
//! disk; nothing is rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{ContentOverride, FsEntry, LayoutDescriptor, ProjectName, ScaffoldPlan},
    error::ScaffoldResult,
};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeSummary {
    pub project: ProjectName,
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
    pub overrides: usize,
    /// The root existed before the run, so earlier files were truncated.
    pub overwrote_existing: bool,
}

/// Main scaffolding service.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
    layout: &'static LayoutDescriptor,
    overrides: Vec<ContentOverride>,
}

impl Materializer {
    /// Create a materializer for `layout`, checking the layout and the
    /// override targets before any filesystem call can happen.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        layout: &'static LayoutDescriptor,
        overrides: impl Into<Vec<ContentOverride>>,
    ) -> ScaffoldResult<Self> {
        let overrides = overrides.into();

        layout.validate()?;
        for over in &overrides {
            over.validate_against(layout)?;
        }

        Ok(Self {
            filesystem,
            layout,
            overrides,
        })
    }

    pub fn layout(&self) -> &'static LayoutDescriptor {
        self.layout
    }

    /// The entries a run for `name` under `parent` would write.
    pub fn plan(&self, name: &ProjectName, parent: impl AsRef<Path>) -> ScaffoldPlan {
        ScaffoldPlan::build(self.layout, name, parent.as_ref(), &self.overrides)
    }

    /// Create the skeleton for `name` under `parent`.
    ///
    /// Existing directories are reused. Existing files at declared paths are
    /// truncated, including files edited since a previous run.
    #[instrument(
        skip_all,
        fields(project = %name, parent = %parent.as_ref().display())
    )]
    pub fn materialize(
        &self,
        name: &ProjectName,
        parent: impl AsRef<Path>,
    ) -> ScaffoldResult<MaterializeSummary> {
        let plan = self.plan(name, parent);
        let overwrote_existing = self.filesystem.exists(plan.root());
        if overwrote_existing {
            warn!(root = %plan.root().display(), "project root exists; declared files will be truncated");
        }

        self.apply(&plan)?;

        let summary = MaterializeSummary {
            project: name.clone(),
            root: plan.root().to_path_buf(),
            directories: plan.directories().count(),
            files: plan.file_count(),
            overrides: plan.override_count(),
            overwrote_existing,
        };

        info!(
            directories = summary.directories,
            files = summary.files,
            "Clean architecture skeleton created for project '{}'",
            name
        );
        Ok(summary)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply(&self, plan: &ScaffoldPlan) -> ScaffoldResult<()> {
        for entry in plan.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = plan.resolve(&dir.path);
                    debug!(path = %path.display(), "create directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = plan.resolve(&file.path);
                    debug!(path = %path.display(), bytes = file.size(), "write file");
                    self.filesystem.write_file(&path, file.content)?;
                }
            }
        }
        Ok(())
    }
}
