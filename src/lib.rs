//! Cross-version compatibility harness for the runtime configuration APIs.
//!
//! Test cases are built either in Rust with the typed builders in [`compat`]
//! or loaded from YAML suites ([`suite`]), then executed by the
//! [`framework::Executor`] against one test plugin binary per runtime version.

pub mod cli;
pub mod commands;
pub mod compat;
pub mod config;
pub mod core;
pub mod error;
pub mod framework;
pub mod project_identity;
pub mod suite;
pub mod types;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run the CLI entrypoint.
pub fn run_cli() {
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Interrupted, stopping after the current plugin call.");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
