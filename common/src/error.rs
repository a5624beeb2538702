use thiserror::Error;

/// A reply typed at one of the interactive prompts that cannot be used.
///
/// These are always recoverable: the prompt is shown again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("{0} is not positive")]
    NotPositive(i64),
}
