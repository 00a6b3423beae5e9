/// Core evaluation logic and context management.
///
/// Contains the evaluation context, statement dispatch, expression
/// evaluation and block scoping.
pub mod core;

/// Binary operator evaluation.
///
/// Applies arithmetic operators to coerced numeric operands.
pub mod binary;

/// Function definition and call evaluation.
///
/// Registers user-defined functions and executes calls in a scope chained to
/// the caller.
pub mod function;

/// Loop evaluation.
///
/// Executes `while` and ranged `for` loops.
pub mod loops;

/// Directive evaluation.
///
/// Handles module imports and embedded foreign code.
pub mod directive;
