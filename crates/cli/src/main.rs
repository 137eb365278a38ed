mod cmd;
mod output;
mod shell;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dsc_lib::file::FileAction;

use crate::cmd::{Destination, cmd_digest, cmd_generate_completions};
use crate::shell::CompletionShell;

/// dsc - A command line interface to Docspell
#[derive(Parser)]
#[command(name = "dsc")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging (ignored when RUST_LOG is set)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate a shell completion script
  GenerateCompletions {
    /// Shell to generate the script for (detected from $SHELL if omitted)
    #[arg(short, long, value_enum, ignore_case = true)]
    shell: Option<CompletionShell>,

    /// Write the script into this directory instead of stdout
    #[arg(long, conflicts_with = "install")]
    out_dir: Option<PathBuf>,

    /// Write the script into the per-user completion directory of the shell
    #[arg(long)]
    install: bool,
  },

  /// Print SHA-256 checksums of files
  Digest {
    /// Files or directories to hash
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Descend into directories
    #[arg(short, long)]
    recursive: bool,

    #[command(flatten)]
    action: FileActionArgs,
  },
}

/// What to do with each file after it has been processed.
#[derive(Args)]
struct FileActionArgs {
  /// Move each file into this directory afterwards
  #[arg(long, value_name = "DIR", conflicts_with = "delete")]
  move_to: Option<PathBuf>,

  /// Delete each file afterwards
  #[arg(long)]
  delete: bool,
}

impl From<FileActionArgs> for FileAction {
  fn from(args: FileActionArgs) -> Self {
    FileAction {
      move_to: args.move_to,
      delete: args.delete,
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("dsc=debug,dsc_lib=debug")
    } else {
      EnvFilter::new("warn")
    }
  });

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::GenerateCompletions {
      shell,
      out_dir,
      install,
    } => {
      let dest = match (out_dir, install) {
        (_, true) => Destination::Install,
        (Some(dir), false) => Destination::Dir(dir),
        (None, false) => Destination::Stdout,
      };
      cmd_generate_completions(shell, dest)
    }
    Commands::Digest {
      paths,
      recursive,
      action,
    } => cmd_digest(&paths, recursive, &action.into()),
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);
  run(cli)
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn unit_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn unit_move_to_conflicts_with_delete() {
    let result = Cli::try_parse_from(["dsc", "digest", "--move-to", "out", "--delete", "a.pdf"]);
    assert!(result.is_err());
  }

  #[test]
  fn unit_shell_name_ignores_case() {
    let cli = Cli::try_parse_from(["dsc", "generate-completions", "--shell", "FISH"]).unwrap();
    assert!(matches!(
      cli.command,
      Commands::GenerateCompletions {
        shell: Some(CompletionShell::Fish),
        ..
      }
    ));
  }
}
