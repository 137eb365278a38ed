//! dsc-lib: Local file handling for the dsc command line client
//!
//! This crate provides the parts of dsc that work without a server:
//! - `util::hash`: streaming content digests of local files
//! - `file`: post-processing actions (move/delete), file naming helpers
//!   and expansion of command line inputs into file lists
//! - `platform::paths`: per-user directories resolved from the XDG variables

pub mod consts;
pub mod file;
pub mod platform;
pub mod util;
