//! Interactive prompts using dialoguer

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use thiserror::Error;

/// Why a prompt could not produce an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user interrupted the prompt (Ctrl-C).
    #[error("prompt interrupted by user")]
    Interrupted,

    /// Any other terminal I/O failure.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                PromptError::Interrupted
            }
            dialoguer::Error::IO(io) => PromptError::Io(io),
        }
    }
}

/// Read one line of free-form input. The answer is trimmed but may be empty;
/// callers decide how to handle an empty answer.
pub fn input_line(prompt: &str) -> Result<String, PromptError> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Ask a yes/no question. Only `y` or `n` are accepted; anything else leaves
/// the prompt waiting, so the caller never sees a third answer.
pub fn confirm(prompt: &str) -> Result<bool, PromptError> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?;
    Ok(answer)
}

/// Ask a yes/no question where pressing Enter picks `default`.
pub fn confirm_with_default(prompt: &str, default: bool) -> Result<bool, PromptError> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(answer)
}
