//! Interactive project-name prompt.

use std::io::{BufRead, Write};

use cleanarch_core::domain::ProjectName;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Ask for the project name on `out` and read one line from `input`.
///
/// Only the line terminator is removed; an empty line, or end of input,
/// selects `default`.
pub fn ask_project_name<R, W>(input: &mut R, out: &mut W, default: &str) -> CliResult<ProjectName>
where
    R: BufRead,
    W: Write,
{
    write!(out, "Enter the project name [{default}]: ").map_err(|e| CliError::IoError {
        message: "failed to write prompt".into(),
        source: e,
    })?;
    out.flush().map_err(|e| CliError::IoError {
        message: "failed to flush prompt".into(),
        source: e,
    })?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| CliError::IoError {
        message: "failed to read project name".into(),
        source: e,
    })?;

    let answer = strip_line_ending(&line);
    debug!(answer, "project name entered");

    ProjectName::or_default(answer, default).map_err(|e| CliError::Core(e.into()))
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
