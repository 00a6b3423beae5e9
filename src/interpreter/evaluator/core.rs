use std::io::Write;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        foreign::ForeignExecutor,
        scope::{ScopeArena, ScopeId},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope arena, the scope
/// currently executing, the output sink that receives `write` lines and
/// embedded output, the foreign-code executor and the modules imported so
/// far, and the number of user function calls currently executing.
///
/// A `Context` is single-threaded and owns its scope chain exclusively.
///
/// # Example
/// ```
/// use nula::{
///     interpreter::{evaluator::core::Context, foreign::ProcessExecutor, value::Value},
///     parse,
/// };
///
/// let program = parse("var x = 10\nwrite x ^ 2").unwrap();
/// let mut context = Context::new(Vec::new(), ProcessExecutor::default());
/// context.run(&program).unwrap();
///
/// assert_eq!(context.output(), b"100\n");
/// assert_eq!(context.variable("x"), Some(&Value::Number(10.0)));
/// ```
pub struct Context<W: Write, F: ForeignExecutor> {
    pub(crate) scopes:     ScopeArena,
    pub(crate) current:    ScopeId,
    pub(crate) out:        W,
    pub(crate) foreign:    F,
    pub(crate) imports:    Vec<String>,
    pub(crate) call_depth: usize,
}

impl<W: Write, F: ForeignExecutor> Context<W, F> {
    /// Creates a context with an empty root scope.
    ///
    /// # Parameters
    /// - `out`: Receives one line per `write` and all embedded output.
    /// - `foreign`: Runs embedded foreign code.
    pub fn new(out: W, foreign: F) -> Self {
        let scopes = ScopeArena::new();
        let current = scopes.root();
        Self { scopes,
               current,
               out,
               foreign,
               imports: Vec::new(),
               call_depth: 0 }
    }

    /// Executes every statement of `program` in order against the current
    /// scope.
    ///
    /// Execution stops at the first error. Output produced before it has
    /// already been flushed to the sink.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        self.exec_statements(&program.statements)
    }

    /// Resolves a variable from the current scope outward.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.scopes.variable(self.current, name)
    }

    /// Module names seen by `import` and `from` directives, in order.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// The output sink.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the context and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Number of live scopes, the root included.
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Executes a sequence of statements in the current scope.
    pub(crate) fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter().try_for_each(|statement| self.exec_statement(statement))
    }

    /// Executes a single statement.
    ///
    /// Declarations and assignments both bind in the current scope only;
    /// neither reaches into an enclosing scope.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// `Ok(())`, or the first runtime error raised while executing it.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        log::trace!("executing statement on line {}", statement.line());

        match statement {
            Statement::VarDecl { name, value, .. } | Statement::Assign { name, value, .. } => {
                let value = self.eval(value)?;
                self.scopes.set_variable(self.current, name, value);
                Ok(())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec_block(then_branch)
                } else if else_branch.is_empty() {
                    Ok(())
                } else {
                    self.exec_block(else_branch)
                }
            },
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::For { var,
                             start,
                             end,
                             body,
                             .. } => self.eval_for(var, start, end, body),
            Statement::FuncDef(def) => {
                self.define_function(def);
                Ok(())
            },
            Statement::Import { name, .. } => {
                self.record_import(name, "import");
                Ok(())
            },
            Statement::From { name, .. } => {
                self.record_import(name, "from");
                Ok(())
            },
            Statement::Embedded { language, code, line } => {
                self.eval_embedded(language, code, *line)
            },
            Statement::Write { expr, .. } => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{value}")?;
                self.out.flush()?;
                Ok(())
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(drop),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. Function calls evaluate to `Nil`.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a variable with no visible binding.
    /// - `UndefinedFunction` for a call with no visible definition.
    /// - Anything raised inside a called function body.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumberLiteral { value, .. } => Ok(Value::Number(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
            Expr::VarRef { name, line } => {
                self.variable(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::FuncCall { name,
                             arguments,
                             line, } => self.call_function(name, arguments, *line),
            Expr::BinOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Executes an `if` or `else` branch in a fresh child scope.
    ///
    /// Bindings made inside the block, including same-named ones, disappear
    /// when it ends.
    pub(crate) fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let parent = self.current;
        self.in_child_scope(parent, |context| context.exec_statements(statements))
    }

    /// Runs `body` with a new child scope of `parent` as the current scope.
    ///
    /// The child scope is discarded and the previous current scope restored
    /// whether or not `body` succeeds.
    pub(crate) fn in_child_scope<T>(&mut self,
                                    parent: ScopeId,
                                    body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                    -> EvalResult<T> {
        let saved = self.current;
        let child = self.scopes.push(parent);
        self.current = child;

        let result = body(self);

        self.scopes.pop(child);
        self.current = saved;
        result
    }
}
