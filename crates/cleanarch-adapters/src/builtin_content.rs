//! Content blobs that ship with cleanarch.
//!
//! Both files are embedded at compile time and written verbatim; the core
//! never looks inside them.

use cleanarch_core::domain::ContentOverride;

/// FastAPI bootstrap module written to `src/main.py`.
pub const ENTRY_POINT: &str = include_str!("../templates/main.py");

/// Python ignore list written to `.gitignore`.
pub const IGNORE_LIST: &str = include_str!("../templates/gitignore");

/// The overrides applied after the layout, in write order.
pub fn builtin_overrides() -> [ContentOverride; 2] {
    [
        ContentOverride::entry_point(ENTRY_POINT),
        ContentOverride::ignore_list(IGNORE_LIST),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanarch_core::domain::CLEAN_ARCHITECTURE;

    #[test]
    fn entry_point_is_a_fastapi_app() {
        assert!(ENTRY_POINT.contains("app = FastAPI("));
    }

    #[test]
    fn ignore_list_covers_bytecode() {
        assert!(IGNORE_LIST.lines().any(|l| l == "__pycache__/"));
    }

    #[test]
    fn overrides_target_declared_directories() {
        for over in builtin_overrides() {
            assert_eq!(over.validate_against(&CLEAN_ARCHITECTURE), Ok(()));
        }
    }
}
