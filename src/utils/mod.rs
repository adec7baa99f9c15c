//! Shared utilities: duration parsing and the interactive prompt.

pub mod duration;
pub mod prompt;

pub use duration::parse_duration;
pub use prompt::{prompt_agent_count, PromptError};
