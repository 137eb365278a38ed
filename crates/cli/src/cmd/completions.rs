//! Implementation of the `dsc generate-completions` command.
//!
//! Package builds call this once per shell and install the output next to
//! the binary, so printing to stdout is the default.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::debug;

use crate::Cli;
use crate::output::print_success;
use crate::shell::CompletionShell;

/// Where a generated completion script should go.
pub enum Destination {
  Stdout,
  Dir(PathBuf),
  Install,
}

pub fn cmd_generate_completions(shell: Option<CompletionShell>, dest: Destination) -> Result<()> {
  let shell = shell.unwrap_or_else(|| {
    let detected = CompletionShell::detect();
    debug!("No shell given, detected {}", detected);
    detected
  });
  let script = shell.generate(&mut Cli::command());

  let dir = match dest {
    Destination::Stdout => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(&script).context("Failed to write completion script")?;
      return stdout.flush().context("Failed to write completion script");
    }
    Destination::Dir(dir) => dir,
    Destination::Install => shell
      .install_dir()
      .with_context(|| format!("Cannot determine {} completion directory", shell))?,
  };

  fs::create_dir_all(&dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
  let path = dir.join(shell.file_name());
  fs::write(&path, &script).with_context(|| format!("Failed to write {}", path.display()))?;
  print_success(&format!("Wrote {} completions to {}", shell, path.display()));

  Ok(())
}
