use std::rc::Rc;

/// A parsed program: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce a [`Value`](crate::interpreter::value::Value) when
/// evaluated. Each variant records the line it started on for error
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, parsed to `f64` at parse time.
    NumberLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StringLiteral {
        /// The literal contents, without quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VarRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call expression (e.g. `greet("bob")`). Always evaluates to
    /// `Nil`.
    FuncCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A binary arithmetic operation.
    BinOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Arithmetic operators supported in binary expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// A user-defined function.
///
/// Definitions are shared between the AST and every scope that registers
/// them, hence the [`Rc`] in [`Statement::FuncDef`].
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Function name.
    pub name:   String,
    /// Parameter names, bound positionally.
    pub params: Vec<String>,
    /// Statements executed on each call.
    pub body:   Vec<Statement>,
    /// Line number of the `fn` keyword.
    pub line:   usize,
}

/// A statement in the language.
///
/// Statements are executed for their side effects and never produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var name = value`
    VarDecl {
        /// Variable name.
        name:  String,
        /// Initializer.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = value`
    Assign {
        /// Variable name.
        name:  String,
        /// Assigned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if condition { ... } else { ... }`
    If {
        /// Condition, tested for truthiness.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise; empty when there is no `else`.
        else_branch: Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while condition { ... }`
    While {
        /// Condition, re-evaluated before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for var in start..end { ... }`
    For {
        /// Loop variable name.
        var:   String,
        /// Inclusive start bound.
        start: Expr,
        /// Exclusive end bound.
        end:   Expr,
        /// Loop body.
        body:  Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `fn name(params) { ... }`
    FuncDef(Rc<FunctionDef>),
    /// `::name`
    Import {
        /// Module name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `<name>`
    From {
        /// Module name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `# =language= [code]`
    Embedded {
        /// Language tag, such as `python`.
        language: String,
        /// Foreign source code.
        code:     String,
        /// Line number in the source code.
        line:     usize,
    },
    /// `write expr`
    Write {
        /// Expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// An expression evaluated for its side effects, such as a call.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the source line the statement starts on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::FuncDef(def) => def.line,
            Self::VarDecl { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Import { line, .. }
            | Self::From { line, .. }
            | Self::Embedded { line, .. }
            | Self::Write { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}
