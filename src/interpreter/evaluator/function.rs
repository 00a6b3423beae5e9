use std::{io::Write, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        foreign::ForeignExecutor,
        value::Value,
    },
};

/// Deepest nesting of user function calls before evaluation fails with
/// `RecursionLimit`.
///
/// A call level costs a few kilobytes of native stack in optimized builds and
/// considerably more in debug builds; the `nula` binary runs programs on a
/// thread whose stack holds this many levels either way.
pub const MAX_CALL_DEPTH: usize = 1000;

impl<W: Write, F: ForeignExecutor> Context<W, F> {
    /// Registers a function definition in the current scope.
    ///
    /// A same-named definition in the current scope is replaced. Definitions
    /// are not hoisted: a function is callable only after this runs.
    pub(crate) fn define_function(&mut self, def: &Rc<FunctionDef>) {
        log::trace!("defining function '{}' with {} parameter(s)", def.name, def.params.len());
        self.scopes.define_function(self.current, Rc::clone(def));
    }

    /// Evaluates a call to a user-defined function.
    ///
    /// The function is resolved through the scope chain first, then the
    /// arguments are evaluated in the caller's scope. The body runs in a new
    /// scope whose parent is the *calling* scope, so free variables in the
    /// body resolve against the caller's bindings, not the definition site.
    ///
    /// Parameters are bound positionally. Missing arguments bind `Nil` and
    /// surplus arguments are dropped; both are logged as warnings.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// Always `Value::Nil`; functions have no return values.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no definition is visible.
    /// - `RecursionLimit` if [`MAX_CALL_DEPTH`] calls are already executing.
    /// - Any error raised while evaluating arguments or the body.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Expr],
                                line: usize)
                                -> EvalResult<Value> {
        let func =
            self.scopes
                .function(self.current, name)
                .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                 line })?;

        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { name: name.to_string(),
                                                      limit: MAX_CALL_DEPTH,
                                                      line });
        }

        let mut arg_vals = arguments.iter()
                                    .map(|argument| self.eval(argument))
                                    .collect::<EvalResult<Vec<_>>>()?;

        if arg_vals.len() != func.params.len() {
            log::warn!("line {line}: '{name}' takes {} argument(s) but {} were supplied",
                       func.params.len(),
                       arg_vals.len());
        }
        arg_vals.resize(func.params.len(), Value::Nil);

        let caller = self.current;
        self.call_depth += 1;
        let result = self.in_child_scope(caller, |context| {
                             let scope = context.current;
                             for (param, value) in func.params.iter().zip(arg_vals) {
                                 context.scopes.set_variable(scope, param, value);
                             }
                             context.exec_statements(&func.body)
                         });
        self.call_depth -= 1;

        result.map(|()| Value::Nil)
    }
}
