//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cleanarch",
    bin_name = "cleanarch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a clean architecture FastAPI project skeleton",
    long_about = "cleanarch creates the directory tree of a clean architecture \
                  FastAPI service (domain, infrastructure, presentation, tests), \
                  with empty package markers, a bootstrap src/main.py and a \
                  .gitignore.\n\n\
                  Existing files at the generated paths are overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 cleanarch                      # prompts for the project name\n\
        \x20 cleanarch shop-api\n\
        \x20 cleanarch shop-api --output ~/work\n\
        \x20 cleanarch shop-api --dry-run",
)]
pub struct Cli {
    /// Logging, colour, config and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project name; used verbatim as the root directory name.
    #[arg(
        value_name = "NAME",
        help = "Project name (prompted for when omitted)"
    )]
    pub name: Option<String>,

    /// Directory the project root is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory of the project (default: current directory)"
    )]
    pub output: PathBuf,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}
