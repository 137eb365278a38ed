/// Name used for the binary and for per-user directories.
pub const APP_NAME: &str = "dsc";

/// Chunk size used when streaming file contents into a digest.
pub const DIGEST_BUFFER_SIZE: usize = 1024;
