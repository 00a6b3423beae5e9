//! # nula
//!
//! nula is an interpreter for the Nula scripting language written in Rust.
//! It lexes, parses and evaluates programs built from variables, arithmetic,
//! conditionals, loops, functions and embedded Python snippets.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        foreign::{ForeignExecutor, ProcessExecutor},
        lexer::tokenize,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator; nodes are never
/// mutated after construction.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code, each carrying the line and the offending token or name.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, foreign
///   executor).
/// - Classifies errors through [`ErrorKind`](error::ErrorKind).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values, evaluation and
/// foreign-code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use error::{Error, ErrorKind};

/// Lexes and parses `source` without evaluating it.
///
/// # Errors
/// Returns the first [`ParseError`] in the source.
///
/// # Examples
/// ```
/// use nula::parse;
///
/// let first = parse("write 2 + 3 * 4").unwrap();
/// let second = parse("write 2 + 3 * 4").unwrap();
/// assert_eq!(first, second);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_program(&tokenize(source))
}

/// Executes a program, writing its output to standard output.
///
/// Embedded `python` code is run with [`ProcessExecutor`] and its default
/// interpreter program.
///
/// # Errors
/// Returns an error if parsing fails, in which case nothing runs, or if
/// evaluation fails, in which case the statements before the failing one
/// have already run and their output has been flushed.
///
/// # Examples
/// ```
/// use nula::{ErrorKind, execute};
///
/// assert!(execute("var x = 2 + 2").is_ok());
///
/// let err = execute("var y = x + 1").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
/// ```
pub fn execute(source: &str) -> Result<(), Error> {
    execute_with(source, io::stdout(), ProcessExecutor::default())
}

/// Executes a program with a caller-supplied output sink and foreign-code
/// executor.
///
/// Programs may nest up to
/// [`MAX_CALL_DEPTH`](interpreter::evaluator::function::MAX_CALL_DEPTH) user
/// function calls, which needs more stack than a default spawned thread
/// provides in an unoptimized build.
///
/// # Errors
/// Same as [`execute`].
///
/// # Examples
/// ```
/// use nula::{execute_with, interpreter::foreign::ProcessExecutor};
///
/// let mut out = Vec::new();
/// execute_with("for i in 0..3 { write i }", &mut out, ProcessExecutor::default()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n");
/// ```
pub fn execute_with<W, F>(source: &str, out: W, foreign: F) -> Result<(), Error>
    where W: Write,
          F: ForeignExecutor
{
    let program = parse(source)?;
    let mut context = Context::new(out, foreign);
    context.run(&program)?;
    Ok(())
}
