//! Diagnostics on stderr.
//!
//! The report and the JSON document own stdout, so every tracing event goes
//! to stderr. What each level adds for a scaffold run:
//!
//! - `error` (`-q`): failures only
//! - `warn` (default): an existing project root about to be overwritten
//! - `info` (`-v`): run start and the completion notice with counts
//! - `debug` (`-vv`): one line per directory created and file written
//! - `trace` (`-vvv`): everything, including span enter/exit
//!
//! A `RUST_LOG` value replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown; dependencies stay silent.
const TARGETS: [&str; 3] = ["cleanarch", "cleanarch_core", "cleanarch_adapters"];

/// Install the stderr subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_run_only_warns() {
        assert_eq!(level_for(&args(0, false)), "warn");
    }

    #[test]
    fn each_v_adds_a_level() {
        assert_eq!(level_for(&args(1, false)), "info");
        assert_eq!(level_for(&args(2, false)), "debug");
        assert_eq!(level_for(&args(3, false)), "trace");
        assert_eq!(level_for(&args(9, false)), "trace");
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(level_for(&args(0, true)), "error");
        assert_eq!(level_for(&args(2, true)), "error");
    }

    #[test]
    fn filter_covers_every_workspace_crate() {
        assert_eq!(
            directives("debug"),
            "cleanarch=debug,cleanarch_core=debug,cleanarch_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_env_filter() {
        assert!(EnvFilter::try_new(directives("info")).is_ok());
    }
}
