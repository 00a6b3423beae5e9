use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        foreign::ForeignExecutor,
        value::Value,
    },
};

impl<W: Write, F: ForeignExecutor> Context<W, F> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first, and coerced with
    /// [`Value::to_number`]. The operation then follows IEEE-754 and never
    /// fails: division by zero yields an infinity or `NaN`.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// A `Value::Number`.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        let lhs = self.eval(left)?.to_number();
        let rhs = self.eval(right)?.to_number();

        Ok(Value::Number(apply_operator(op, lhs, rhs)))
    }
}

/// Applies an arithmetic operator to two numbers.
///
/// # Example
/// ```
/// use nula::{ast::BinaryOperator, interpreter::evaluator::binary::apply_operator};
///
/// assert_eq!(apply_operator(BinaryOperator::Pow, 10.0, 2.0), 100.0);
/// assert!(apply_operator(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
pub fn apply_operator(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
        BinaryOperator::Pow => lhs.powf(rhs),
    }
}
