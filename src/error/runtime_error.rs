use std::process::ExitStatus;

use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable with no visible binding.
    #[error("UndefinedVariableError on line {line}: undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function with no visible definition.
    #[error("UndefinedFunctionError on line {line}: undefined function '{name}'")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Calls nested deeper than the evaluator allows.
    #[error("RecursionLimitError on line {line}: call to '{name}' exceeds the limit of {limit} nested calls")]
    RecursionLimit {
        /// The function whose call crossed the limit.
        name:  String,
        /// The maximum number of nested calls.
        limit: usize,
        /// The source line of the call.
        line:  usize,
    },
    /// Embedded foreign code could not be executed.
    #[error("ForeignExecutionError on line {line}: {source}")]
    ForeignExecution {
        /// What went wrong.
        source: ForeignExecutionError,
        /// The source line of the embedded directive.
        line:   usize,
    },
    /// Program output could not be written.
    #[error("OutputError: {0}")]
    Output(#[from] std::io::Error),
}

/// Failures reported by a foreign-code executor.
#[derive(Debug, Error)]
pub enum ForeignExecutionError {
    /// No executor exists for the language tag.
    #[error("unsupported language '{language}'")]
    UnsupportedLanguage {
        /// The tag from the directive.
        language: String,
    },
    /// The temporary file hosting the code could not be prepared.
    #[error("could not prepare temporary file: {0}")]
    TempFile(#[source] std::io::Error),
    /// The external interpreter could not be started.
    #[error("could not launch '{program}': {source}")]
    Launch {
        /// The interpreter program.
        program: String,
        /// The launch failure.
        source:  std::io::Error,
    },
    /// The external interpreter ran but exited unsuccessfully.
    #[error("'{program}' exited with {status}")]
    Failed {
        /// The interpreter program.
        program: String,
        /// The exit status.
        status:  ExitStatus,
        /// Output captured before the failure.
        output:  String,
    },
}

impl RuntimeError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::UndefinedFunction { .. } => ErrorKind::UndefinedFunction,
            Self::RecursionLimit { .. } => ErrorKind::RecursionLimit,
            Self::ForeignExecution { .. } => ErrorKind::ForeignExecution,
            Self::Output(_) => ErrorKind::Output,
        }
    }
}
