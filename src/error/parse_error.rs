use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific construct was required but another token was found.
    #[error("ParseError on line {line}: expected {expected}, found {found}")]
    Expected {
        /// Description of the required construct, such as `'}'`.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression.
    #[error("ParseError on line {line}: unexpected token {token}")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses or braces nested past the parser's limit.
    #[error("ParseError on line {line}: nesting exceeds the limit of {limit} levels")]
    TooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The line of the bracket that crossed the limit.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Expected { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::TooDeep { line, .. } => *line,
        }
    }
}
