//! Local file handling.
//!
//! After dsc is done with a file it can leave it alone, delete it, or move
//! it into another directory. Moves keep the layout below the directory the
//! file was found in and never overwrite an existing file.

mod collect;
mod name;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

pub use collect::{InputFile, collect_files};
pub use name::{filename_from_header, splice_name};

#[derive(Debug, Error)]
pub enum FileError {
  #[error("no such file or directory: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("{} is a directory (use --recursive)", path.display())]
  IsDirectory { path: PathBuf },

  #[error("path has no file name: {}", path.display())]
  NoFileName { path: PathBuf },

  #[error("failed to walk directory {}", path.display())]
  Walk { path: PathBuf, source: walkdir::Error },

  #[error("failed to create directory {}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to move {} to {}", from.display(), to.display())]
  Move {
    from: PathBuf,
    to: PathBuf,
    source: io::Error,
  },

  #[error("failed to delete {}", path.display())]
  Delete { path: PathBuf, source: io::Error },

  #[error("failed to clean up directory {}", path.display())]
  Cleanup { path: PathBuf, source: io::Error },
}

/// What to do with a file once it has been processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAction {
  /// Move the file into this directory. Takes precedence over `delete`.
  pub move_to: Option<PathBuf>,
  /// Delete the file.
  pub delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileActionResult {
  Deleted(PathBuf),
  Moved(PathBuf),
  Nothing,
}

impl FileAction {
  pub fn is_noop(&self) -> bool {
    self.move_to.is_none() && !self.delete
  }

  /// Apply the action to `file`.
  ///
  /// `root` is the directory `file` was found under. When given, a moved file
  /// keeps its path relative to `root` below the target directory.
  pub fn execute(&self, file: &Path, root: Option<&Path>) -> Result<FileActionResult, FileError> {
    match &self.move_to {
      Some(target) => move_file(file, root, target).map(FileActionResult::Moved),
      None if self.delete => delete_file(file).map(|_| FileActionResult::Deleted(file.to_path_buf())),
      None => Ok(FileActionResult::Nothing),
    }
  }
}

fn move_file(file: &Path, root: Option<&Path>, target: &Path) -> Result<PathBuf, FileError> {
  let target_file = match root.and_then(|r| file.strip_prefix(r).ok()) {
    Some(part) => target.join(part),
    None => {
      let name = file.file_name().ok_or_else(|| FileError::NoFileName {
        path: file.to_path_buf(),
      })?;
      target.join(name)
    }
  };
  let target_file = free_target(target_file);
  debug!("Move file '{}' -> '{}'", file.display(), target_file.display());

  if let Some(parent) = target_file.parent() {
    fs::create_dir_all(parent).map_err(|source| FileError::CreateDir {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  rename_or_copy(file, &target_file).map_err(|source| FileError::Move {
    from: file.to_path_buf(),
    to: target_file.clone(),
    source,
  })?;

  // The move has happened, cleanup failures only warn.
  if let Some(parent) = file.parent().filter(|p| is_removable(p, root)) {
    if let Err(e) = remove_if_empty(parent) {
      warn!("{}", e);
    }
  }

  Ok(target_file)
}

/// Returns `path` if nothing exists there, otherwise the first free
/// `name_N.ext` sibling.
fn free_target(path: PathBuf) -> PathBuf {
  if !path.exists() {
    return path;
  }
  let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
    return path;
  };

  let mut counter = 1;
  loop {
    let candidate = path.with_file_name(splice_name(&name, counter));
    if !candidate.exists() {
      return candidate;
    }
    counter += 1;
  }
}

fn rename_or_copy(from: &Path, to: &Path) -> io::Result<()> {
  match fs::rename(from, to) {
    Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
      warn!("{} is on another device, copying instead", to.display());
      fs::copy(from, to)?;
      fs::remove_file(from)
    }
    other => other,
  }
}

/// Whether `dir` may be removed once it is empty.
///
/// The directory given on the command line and the current directory are
/// kept, as are paths ending in `.` or `..`.
fn is_removable(dir: &Path, root: Option<&Path>) -> bool {
  if dir.as_os_str().is_empty() || dir.file_name().is_none() {
    return false;
  }
  if root.is_some_and(|r| r == dir) {
    return false;
  }
  match (std::env::current_dir(), fs::canonicalize(dir)) {
    (Ok(cwd), Ok(dir)) => cwd != dir,
    _ => true,
  }
}

fn remove_if_empty(dir: &Path) -> Result<(), FileError> {
  let cleanup_err = |source: io::Error| FileError::Cleanup {
    path: dir.to_path_buf(),
    source,
  };
  if fs::read_dir(dir).map_err(cleanup_err)?.next().is_none() {
    debug!("Removing empty directory {}", dir.display());
    fs::remove_dir(dir).map_err(cleanup_err)?;
  }
  Ok(())
}

fn delete_file(file: &Path) -> Result<(), FileError> {
  debug!("Deleting file: {}", file.display());
  fs::remove_file(file).map_err(|source| FileError::Delete {
    path: file.to_path_buf(),
    source,
  })
}
