//! Implementation of the `dsc digest` command.
//!
//! Prints one `<sha256>  <path>` line per file, the layout `sha256sum`
//! uses, and optionally moves or deletes each file once it is hashed.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use dsc_lib::file::{FileAction, FileActionResult, collect_files};
use dsc_lib::util::hash::digest_file_sha256;

use crate::output::{plural, print_info, print_success};

pub fn cmd_digest(paths: &[PathBuf], recursive: bool, action: &FileAction) -> Result<()> {
  let files = collect_files(paths, recursive)?;
  if files.is_empty() {
    print_info("No files found");
    return Ok(());
  }

  let mut stdout = io::stdout().lock();
  let mut moved = 0;
  let mut deleted = 0;

  for file in &files {
    let hash = digest_file_sha256(&file.path)?;
    writeln!(stdout, "{}  {}", hash, file.path.display()).context("Failed to write checksum")?;

    match action.execute(&file.path, file.root())? {
      FileActionResult::Moved(to) => {
        info!("Moved {} to {}", file.path.display(), to.display());
        moved += 1;
      }
      FileActionResult::Deleted(_) => deleted += 1,
      FileActionResult::Nothing => {}
    }
  }
  stdout.flush().context("Failed to write checksum")?;

  if moved > 0 {
    print_success(&format!("Moved {}", plural(moved, "file")));
  }
  if deleted > 0 {
    print_success(&format!("Deleted {}", plural(deleted, "file")));
  }

  Ok(())
}
