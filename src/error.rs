/// Parsing errors.
///
/// Defines the error raised when the token stream violates the grammar.
/// Parsing stops at the first violation; there is no recovery.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// failures of the foreign-code executor.
pub mod runtime_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use runtime_error::{ForeignExecutionError, RuntimeError};

/// Classifies an [`Error`] without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source failed to parse.
    Parse,
    /// A variable was read before any binding was visible.
    UndefinedVariable,
    /// A function was called before any definition was visible.
    UndefinedFunction,
    /// User function calls nested past the call depth limit.
    RecursionLimit,
    /// Embedded foreign code could not be run.
    ForeignExecution,
    /// Writing to the output sink failed.
    Output,
}

/// Any error produced while executing a program.
#[derive(Debug, Error)]
pub enum Error {
    /// Parsing failed; nothing was evaluated.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed part way through.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) => e.kind(),
        }
    }
}
