//! Integration tests for cleanarch-core through its public API.

use std::path::Path;

use cleanarch_core::prelude::*;
use mockall::mock;

mock! {
    pub Fs {}
    impl Filesystem for Fs {
        fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
        fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
        fn exists(&self, path: &Path) -> bool;
    }
}

const ENTRY: &str = "from fastapi import FastAPI\n";
const IGNORE: &str = ".venv/\n";

fn materializer(fs: MockFs) -> Materializer {
    Materializer::new(
        Box::new(fs),
        &CLEAN_ARCHITECTURE,
        [
            ContentOverride::entry_point(ENTRY),
            ContentOverride::ignore_list(IGNORE),
        ],
    )
    .unwrap()
}

#[test]
fn every_layout_directory_is_created_under_the_root() {
    let mut fs = MockFs::new();
    fs.expect_exists().return_const(false);
    for entry in CLEAN_ARCHITECTURE.entries() {
        let expected = Path::new("Shop").join(entry.relative_dir());
        fs.expect_create_dir_all()
            .withf(move |p| p == expected)
            .times(1)
            .returning(|_| Ok(()));
    }
    fs.expect_write_file().returning(|_, _| Ok(()));

    materializer(fs)
        .materialize(&ProjectName::new("Shop").unwrap(), "")
        .unwrap();
}

#[test]
fn only_overrides_carry_content() {
    let mut fs = MockFs::new();
    fs.expect_exists().return_const(false);
    fs.expect_create_dir_all().returning(|_| Ok(()));
    fs.expect_write_file()
        .withf(|_, c| c == ENTRY || c == IGNORE)
        .times(2)
        .returning(|_, _| Ok(()));
    fs.expect_write_file()
        .withf(|_, c| c.is_empty())
        .times(22)
        .returning(|_, _| Ok(()));

    materializer(fs)
        .materialize(&ProjectName::new("Shop").unwrap(), "")
        .unwrap();
}

#[test]
fn plan_preview_does_not_touch_the_filesystem() {
    let fs = MockFs::new();
    let m = materializer(fs);

    let plan = m.plan(&ProjectName::default(), "workspace");
    assert_eq!(plan.root(), Path::new("workspace").join(DEFAULT_PROJECT_NAME));
    assert_eq!(plan.files().count(), 24);
}
