//! CLI command implementations.
//!
//! - `read`: Run ingestion and render the result
//! - `names`: Preview source unit names
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod names;
pub mod read;
pub mod validate;

pub use completions::CompletionsCommand;
pub use names::NamesCommand;
pub use read::{FormatArg, ReadCommand};
pub use validate::ValidateCommand;
