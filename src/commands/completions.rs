use crate::cli::args::Cli;
use crate::error::Result;
use crate::project_identity::BINARY_NAME;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Print the completion script for `shell` to stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout().lock();

    generate(shell, &mut cmd, BINARY_NAME, &mut stdout);
    stdout.flush()?;

    Ok(())
}
