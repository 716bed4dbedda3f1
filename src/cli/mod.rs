//! CLI module - argument parsing, interactive prompts, and subcommands

mod args;
pub mod list;
mod prompts;

pub use args::{Cli, Commands};
pub use prompts::{confirm, confirm_with_default, input_line, PromptError};
