mod completions;
mod digest;

pub use completions::{Destination, cmd_generate_completions};
pub use digest::cmd_digest;
