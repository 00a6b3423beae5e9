/// Entry points and shared result type.
///
/// Defines [`ParseResult`](core::ParseResult), the program driver and the
/// expression entry point.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, control flow, function
/// definitions, directives, assignments and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power precedence levels.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, variable references, calls and parenthesized expressions.
pub mod primary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Parser helpers.
///
/// Token expectations, identifiers and comma-separated lists.
pub mod utils;
