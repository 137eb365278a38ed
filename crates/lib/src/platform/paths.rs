use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
  #[error("environment variable {0} is not set")]
  EnvNotSet(&'static str),
}

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Result<PathBuf, PathError> {
  std::env::var_os("USERPROFILE")
    .map(PathBuf::from)
    .ok_or(PathError::EnvNotSet("USERPROFILE"))
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Result<PathBuf, PathError> {
  std::env::var_os("HOME")
    .map(PathBuf::from)
    .ok_or(PathError::EnvNotSet("HOME"))
}

/// Returns the base directory for user configuration (`XDG_CONFIG_HOME`).
#[cfg(windows)]
pub fn config_home() -> Result<PathBuf, PathError> {
  std::env::var_os("APPDATA")
    .map(PathBuf::from)
    .ok_or(PathError::EnvNotSet("APPDATA"))
}

/// Returns the base directory for user configuration (`XDG_CONFIG_HOME`).
#[cfg(not(windows))]
pub fn config_home() -> Result<PathBuf, PathError> {
  match non_empty_var("XDG_CONFIG_HOME") {
    Some(dir) => Ok(dir),
    None => Ok(home_dir()?.join(".config")),
  }
}

/// Returns the base directory for user data (`XDG_DATA_HOME`).
#[cfg(windows)]
pub fn data_home() -> Result<PathBuf, PathError> {
  std::env::var_os("LOCALAPPDATA")
    .map(PathBuf::from)
    .ok_or(PathError::EnvNotSet("LOCALAPPDATA"))
}

/// Returns the base directory for user data (`XDG_DATA_HOME`).
#[cfg(not(windows))]
pub fn data_home() -> Result<PathBuf, PathError> {
  match non_empty_var("XDG_DATA_HOME") {
    Some(dir) => Ok(dir),
    None => Ok(home_dir()?.join(".local").join("share")),
  }
}

// The XDG spec treats an empty value the same as an unset one.
#[cfg(not(windows))]
fn non_empty_var(name: &str) -> Option<PathBuf> {
  std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from)
}
