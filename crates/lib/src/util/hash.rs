//! Content digests for local files.
//!
//! This module provides:
//! - `ContentHash`: a full 64-character SHA-256 hex digest
//! - `digest()`: streaming digest of any reader with any `Digest` algorithm
//! - `digest_file()` / `digest_file_sha256()`: the same for a file on disk

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::consts::DIGEST_BUFFER_SIZE;

/// A full 64-character SHA-256 hash of a file's contents.
///
/// # Format
///
/// The hash is a lowercase hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(pub String);

impl std::fmt::Display for ContentHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Error)]
pub enum HashError {
  #[error("failed to open file {}", path.display())]
  Open { path: PathBuf, source: io::Error },

  #[error("failed to read file {}", path.display())]
  Read { path: PathBuf, source: io::Error },
}

/// Compute the digest of everything `reader` yields and return it as hex.
///
/// Input is consumed in chunks of [`DIGEST_BUFFER_SIZE`] bytes until the
/// reader reports end of stream.
pub fn digest<D: Digest, R: Read>(reader: &mut R) -> io::Result<String> {
  let mut hasher = D::new();
  let mut buffer = [0u8; DIGEST_BUFFER_SIZE];

  loop {
    let n = match reader.read(&mut buffer) {
      Ok(0) => break,
      Ok(n) => n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    };
    hasher.update(&buffer[..n]);
  }

  Ok(hex::encode(hasher.finalize()))
}

/// Digest a file's contents with the algorithm `D`.
pub fn digest_file<D: Digest>(path: &Path) -> Result<String, HashError> {
  debug!("Calculating hash for file {}", path.display());
  let mut file = fs::File::open(path).map_err(|source| HashError::Open {
    path: path.to_path_buf(),
    source,
  })?;
  digest::<D, _>(&mut file).map_err(|source| HashError::Read {
    path: path.to_path_buf(),
    source,
  })
}

/// Hash a file's contents with SHA-256.
pub fn digest_file_sha256(path: &Path) -> Result<ContentHash, HashError> {
  digest_file::<Sha256>(path).map(ContentHash)
}

#[cfg(test)]
mod tests {
  use super::*;
  use sha2::Sha512;
  use std::io::Cursor;
  use tempfile::tempdir;

  const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
  const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

  /// Reader that hands out at most `chunk` bytes per call.
  struct Trickle<'a> {
    data: &'a [u8],
    chunk: usize,
  }

  impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      let n = self.chunk.min(buf.len()).min(self.data.len());
      buf[..n].copy_from_slice(&self.data[..n]);
      self.data = &self.data[n..];
      Ok(n)
    }
  }

  #[test]
  fn unit_digest_known_vectors() {
    assert_eq!(digest::<Sha256, _>(&mut Cursor::new(b"")).unwrap(), EMPTY_SHA256);
    assert_eq!(digest::<Sha256, _>(&mut Cursor::new(b"abc")).unwrap(), ABC_SHA256);
  }

  #[test]
  fn unit_digest_is_generic_over_algorithm() {
    let hex = digest::<Sha512, _>(&mut Cursor::new(b"abc")).unwrap();
    assert_eq!(hex.len(), 128);
    assert!(hex.starts_with("ddaf35a193617aba"));
  }

  #[test]
  fn unit_short_reads_do_not_truncate_input() {
    let data = vec![7u8; DIGEST_BUFFER_SIZE * 3 + 17];
    let expected = digest::<Sha256, _>(&mut Cursor::new(&data)).unwrap();

    let mut trickle = Trickle { data: &data, chunk: 100 };
    assert_eq!(digest::<Sha256, _>(&mut trickle).unwrap(), expected);
  }

  #[test]
  fn unit_digest_file_sha256_matches_reader_digest() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("abc.txt");
    fs::write(&file, "abc").unwrap();

    let hash = digest_file_sha256(&file).unwrap();
    assert_eq!(hash.0, ABC_SHA256);
    assert_eq!(hash.to_string().len(), 64);
  }

  #[test]
  fn unit_missing_file_reports_path() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("nope.pdf");

    let err = digest_file_sha256(&missing).unwrap_err();
    assert!(matches!(err, HashError::Open { .. }));
    assert!(err.to_string().contains("nope.pdf"));
  }
}
