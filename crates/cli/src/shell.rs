//! Shells dsc can generate completion scripts for.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Command, ValueEnum};
use dsc_lib::consts::APP_NAME;
use dsc_lib::platform::paths::{PathError, config_home, data_home};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompletionShell {
  Bash,
  Zsh,
  Fish,
}

impl CompletionShell {
  /// Detect the current shell from `$SHELL`, falling back to bash.
  pub fn detect() -> Self {
    env::var_os("SHELL")
      .and_then(|shell| {
        Path::new(&shell)
          .file_name()
          .map(|n| n.to_string_lossy().to_lowercase())
      })
      .map(|name| Self::from_name(&name))
      .unwrap_or(CompletionShell::Bash)
  }

  fn from_name(name: &str) -> Self {
    match name {
      "zsh" => CompletionShell::Zsh,
      "bash" => CompletionShell::Bash,
      "fish" => CompletionShell::Fish,
      _ if name.contains("zsh") => CompletionShell::Zsh,
      _ if name.contains("fish") => CompletionShell::Fish,
      _ => CompletionShell::Bash,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      CompletionShell::Bash => "bash",
      CompletionShell::Zsh => "zsh",
      CompletionShell::Fish => "fish",
    }
  }

  /// File name the shell looks for when loading completions for dsc.
  pub fn file_name(&self) -> String {
    match self {
      CompletionShell::Bash => format!("{}.bash", APP_NAME),
      CompletionShell::Zsh => format!("_{}", APP_NAME),
      CompletionShell::Fish => format!("{}.fish", APP_NAME),
    }
  }

  /// Per-user directory the shell loads completion scripts from.
  pub fn install_dir(&self) -> Result<PathBuf, PathError> {
    Ok(match self {
      CompletionShell::Bash => data_home()?.join("bash-completion").join("completions"),
      CompletionShell::Zsh => data_home()?.join("zsh").join("site-functions"),
      CompletionShell::Fish => config_home()?.join("fish").join("completions"),
    })
  }

  /// Render the completion script for `cmd`.
  pub fn generate(&self, cmd: &mut Command) -> Vec<u8> {
    let shell = match self {
      CompletionShell::Bash => clap_complete::Shell::Bash,
      CompletionShell::Zsh => clap_complete::Shell::Zsh,
      CompletionShell::Fish => clap_complete::Shell::Fish,
    };
    let mut buf = Vec::new();
    clap_complete::generate(shell, cmd, APP_NAME, &mut buf);
    buf
  }
}

impl fmt::Display for CompletionShell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
