// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `scriptstamp`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scriptstamp",
    version,
    about = "Add a type declaration line to newly created scripts.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root to watch.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: String,

    /// Path to the config file (TOML).
    ///
    /// Default: `Scriptstamp.toml` in the project root; defaults are used
    /// when that file does not exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Scan once, stamping scripts created in the last few seconds, then exit.
    #[arg(long)]
    pub once: bool,

    /// Shell command run after a script is rewritten, so an editor can
    /// reload it. The script path is passed in `SCRIPTSTAMP_PATH`.
    #[arg(long, value_name = "CMD")]
    pub reload_cmd: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCRIPTSTAMP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved settings, but don't watch or touch any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::parse_from(["scriptstamp"]);
        assert_eq!(args.root, ".");
        assert!(args.config.is_none());
        assert!(!args.once);
        assert!(args.reload_cmd.is_none());
    }

    #[test]
    fn all_flags() {
        let args = CliArgs::parse_from([
            "scriptstamp",
            "--root",
            "game",
            "--config",
            "stamp.toml",
            "--once",
            "--reload-cmd",
            "echo reload",
            "--log-level",
            "debug",
            "--dry-run",
        ]);
        assert_eq!(args.root, "game");
        assert_eq!(args.config.as_deref(), Some("stamp.toml"));
        assert!(args.once && args.dry_run);
        assert_eq!(args.reload_cmd.as_deref(), Some("echo reload"));
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
