/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST statement by statement, resolves names
/// through the scope chain, applies arithmetic, runs user functions and
/// dispatches embedded code to the foreign executor.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Creates and discards scopes for blocks and function calls.
/// - Reports undefined names and foreign execution failures.
pub mod evaluator;
/// Foreign-code execution.
///
/// Defines the [`ForeignExecutor`](foreign::ForeignExecutor) seam the
/// evaluator calls for embedded code, and the subprocess-backed
/// implementation.
pub mod foreign;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text line by line and produces a stream of
/// tokens: numbers, strings, identifiers, keywords, operators and symbols,
/// plus the keyword sequences produced by import and embedded-code lines.
///
/// # Responsibilities
/// - Drops blank lines, comment blocks and directive comments.
/// - Recognizes import, from and embedded-code lines as whole units.
/// - Skips characters it does not recognize instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. It
/// stops at the first grammar violation.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence: additive, multiplicative, power.
/// - Reports the expected construct, the token found and its line.
pub mod parser;
/// Scope storage.
///
/// An arena of scopes linked to their parents, each holding variable and
/// function bindings.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum.
/// - Implements the numeric coercion and truthiness rules.
/// - Renders values for `write`.
pub mod value;
