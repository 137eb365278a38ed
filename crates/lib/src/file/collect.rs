use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::FileError;

/// A file picked up from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
  pub path: PathBuf,
  /// The directory argument this file was found under, if any.
  pub root: Option<PathBuf>,
}

impl InputFile {
  pub fn root(&self) -> Option<&Path> {
    self.root.as_deref()
  }
}

/// Expand `paths` into the list of files to process.
///
/// Files are returned as given. Directories are walked in file name order
/// when `recursive` is set and rejected otherwise. Symlinks are followed
/// inside directories just as they are when given directly.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<InputFile>, FileError> {
  let mut files = Vec::new();

  for path in paths {
    if path.is_file() {
      files.push(InputFile {
        path: path.clone(),
        root: None,
      });
    } else if path.is_dir() {
      if !recursive {
        return Err(FileError::IsDirectory { path: path.clone() });
      }
      let before = files.len();
      for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| FileError::Walk {
          path: path.clone(),
          source,
        })?;
        if entry.file_type().is_file() {
          files.push(InputFile {
            path: entry.into_path(),
            root: Some(path.clone()),
          });
        }
      }
      debug!("Found {} file(s) in {}", files.len() - before, path.display());
    } else {
      return Err(FileError::NotFound { path: path.clone() });
    }
  }

  Ok(files)
}
