use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        foreign::ForeignExecutor,
        value::Value,
    },
};

impl<W: Write, F: ForeignExecutor> Context<W, F> {
    /// Evaluates a `while` loop.
    ///
    /// The condition is evaluated before every iteration and the body runs in
    /// the current scope, so assignments in the body are what eventually make
    /// the condition falsy. There is no `break`.
    ///
    /// # Parameters
    /// - `condition`: Loop condition, tested for truthiness.
    /// - `body`: Loop body.
    pub(crate) fn eval_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<()> {
        while self.eval(condition)?.is_truthy() {
            self.exec_statements(body)?;
        }
        Ok(())
    }

    /// Evaluates a ranged `for` loop.
    ///
    /// Both bounds are evaluated once, in order, and coerced to numbers. The
    /// loop variable then takes `start`, `start + 1`, ... while it is below
    /// `end`, so the end bound is exclusive and a `NaN` bound runs zero
    /// iterations.
    ///
    /// The loop variable and the body share the current scope, so the
    /// variable remains visible after the loop with its last value.
    ///
    /// # Parameters
    /// - `var`: Loop variable name.
    /// - `start`: Start bound expression.
    /// - `end`: End bound expression.
    /// - `body`: Loop body.
    pub(crate) fn eval_for(&mut self,
                           var: &str,
                           start: &Expr,
                           end: &Expr,
                           body: &[Statement])
                           -> EvalResult<()> {
        let start = self.eval(start)?.to_number();
        let end = self.eval(end)?.to_number();

        let mut i = start;
        while i < end {
            self.scopes.set_variable(self.current, var, Value::Number(i));
            self.exec_statements(body)?;
            i += 1.0;
        }
        Ok(())
    }
}
