// Errors from talking to the user.
use std::io::ErrorKind;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// The terminal (or whatever we were handed instead) stopped cooperating.
pub enum PromptError {
    #[error("Could not read a reply: {0}")]
    InputUnreadable(ErrorKind),
    #[error("Could not show the prompt: {0}")]
    OutputUnwritable(ErrorKind),
}
