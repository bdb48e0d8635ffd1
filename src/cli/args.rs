use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "runtime-compat",
    about = "Cross-version compatibility tests for runtime configuration APIs",
    long_about = "Runs versioned configuration API calls through per-version test plugins \
                  against a shared temporary fixture and checks that every runtime version \
                  reads what the others write.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (plugin invocations, fixture paths)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", value_parser = ["auto", "always", "never"])]
    pub color: Option<String>,

    /// Output format
    #[arg(long, global = true, value_name = "FORMAT", value_parser = ["table", "json", "yaml"])]
    pub format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load suites and run every test case against the plugins
    Run {
        /// Suite files or directories
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Only run cases whose `suite/case` name matches this regex
        #[arg(long, value_name = "REGEX")]
        filter: Option<String>,

        /// Directory searched for plugin binaries before PATH
        #[arg(long, value_name = "DIR")]
        plugin_dir: Option<PathBuf>,

        /// Per-invocation plugin timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Keep fixture directories for inspection
        #[arg(long)]
        keep_fixtures: bool,

        /// Keep going after the first failing API of a case
        #[arg(long)]
        no_fail_fast: bool,
    },

    /// Validate suites without running them
    Check {
        /// Suite files or directories
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show which API exists in which runtime version
    Matrix {
        /// Show a single API
        #[arg(long, value_name = "NAME")]
        api: Option<String>,
    },

    /// List runtime versions and their plugin binaries
    Versions {
        /// Directory searched for plugin binaries before PATH
        #[arg(long, value_name = "DIR")]
        plugin_dir: Option<PathBuf>,
    },

    /// Manage persistent settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show all settings
    Show,
    /// Set a setting value
    Set { key: String, value: String },
    /// Reset a setting to its default
    Reset { key: String },
}

#[cfg(test)]
mod tests;
