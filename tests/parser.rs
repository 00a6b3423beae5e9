use std::rc::Rc;

use nula::{
    ast::{BinaryOperator, Expr, FunctionDef, Program, Statement},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_program},
    parse,
};

fn num(value: f64) -> Expr {
    Expr::NumberLiteral { value, line: 1 }
}

fn var(name: &str) -> Expr {
    Expr::VarRef { name: name.to_string(),
                   line: 1, }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinOp { left: Box::new(left),
                  op,
                  right: Box::new(right),
                  line: 1 }
}

fn single(src: &str) -> Statement {
    let mut program = parse(src).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"));
    assert_eq!(program.statements.len(), 1, "{src:?}");
    program.statements.remove(0)
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expected = bin(num(2.0), BinaryOperator::Add, bin(num(3.0), BinaryOperator::Mul, num(4.0)));
    assert_eq!(single("write 2 + 3 * 4"),
               Statement::Write { expr: expected,
                                  line: 1, });
}

#[test]
fn power_binds_tightest_and_takes_one_primary() {
    let expected = bin(num(2.0), BinaryOperator::Mul, bin(var("x"), BinaryOperator::Pow, num(2.0)));
    assert_eq!(single("2 * x ^ 2"),
               Statement::Expression { expr: expected,
                                       line: 1, });

    let err = parse("write 2 ^ 3 ^ 4").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref token, line: 1 } if token == "'^'"),
            "{err:?}");
}

#[test]
fn additive_operators_are_left_associative() {
    let expected = bin(bin(num(8.0), BinaryOperator::Sub, num(2.0)),
                       BinaryOperator::Sub,
                       num(1.0));
    assert_eq!(single("8 - 2 - 1"),
               Statement::Expression { expr: expected,
                                       line: 1, });
}

#[test]
fn identifier_statements() {
    assert_eq!(single("x = 1"),
               Statement::Assign { name:  "x".to_string(),
                                   value: num(1.0),
                                   line:  1, });
    assert_eq!(single("x"),
               Statement::Expression { expr: var("x"),
                                       line: 1, });
    assert_eq!(single("f(1, y)"),
               Statement::Expression { expr: Expr::FuncCall { name:      "f".to_string(),
                                                              arguments: vec![num(1.0), var("y")],
                                                              line:      1, },
                                       line: 1, });
}

#[test]
fn control_flow_statements() {
    assert_eq!(single("if x { write 1 } else { write 2 }"),
               Statement::If { condition:   var("x"),
                               then_branch: vec![Statement::Write { expr: num(1.0),
                                                                    line: 1, }],
                               else_branch: vec![Statement::Write { expr: num(2.0),
                                                                    line: 1, }],
                               line:        1, });
    assert_eq!(single("while x { }"),
               Statement::While { condition: var("x"),
                                  body:      Vec::new(),
                                  line:      1, });
    assert_eq!(single("for i in 0..n { }"),
               Statement::For { var:   "i".to_string(),
                                start: num(0.0),
                                end:   var("n"),
                                body:  Vec::new(),
                                line:  1, });
}

#[test]
fn function_definitions() {
    let def = FunctionDef { name:   "add".to_string(),
                            params: vec!["a".to_string(), "b".to_string()],
                            body:   vec![Statement::Write { expr: bin(var("a"),
                                                                  BinaryOperator::Add,
                                                                  var("b")),
                                                            line: 1, }],
                            line:   1, };
    assert_eq!(single("fn add(a, b) { write a + b }"), Statement::FuncDef(Rc::new(def)));

    assert!(matches!(single("fn nothing() { }"),
                     Statement::FuncDef(def) if def.params.is_empty() && def.body.is_empty()));
    assert!(parse("fn bad(a,) { }").is_err());
    assert!(parse("fn bad(1) { }").is_err());
}

#[test]
fn directives() {
    assert_eq!(single("::math"),
               Statement::Import { name: "math".to_string(),
                                   line: 1, });
    assert_eq!(single("<io>"),
               Statement::From { name: "io".to_string(),
                                 line: 1, });
    assert_eq!(single("# =python= [print(1)]"),
               Statement::Embedded { language: "python".to_string(),
                                     code:     "print(1)".to_string(),
                                     line:     1, });
    assert!(parse("::").is_err());
}

#[test]
fn missing_brace_names_the_brace() {
    let err = parse("if 1 { write \"x\"").unwrap_err();
    assert_eq!(err,
               ParseError::Expected { expected: "'}'".to_string(),
                                      found:    "end of input".to_string(),
                                      line:     1, });
}

#[test]
fn errors_report_expected_construct_and_line() {
    let err = parse("var x = 1\nfor i 0..3 { }").unwrap_err();
    assert_eq!(err,
               ParseError::Expected { expected: "'in'".to_string(),
                                      found:    "'0'".to_string(),
                                      line:     2, });
    assert_eq!(err.line(), 2);

    let err = parse("write (1 + 2").unwrap_err();
    assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "')'"),
            "{err:?}");
}

#[test]
fn parsing_is_deterministic() {
    let src = "var x = 1\nfn f(a) { if a { write a ^ 2 } }\nfor i in 0..3 { f(i) }";
    let first = parse_program(&tokenize(src)).unwrap();
    let second = parse_program(&tokenize(src)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.statements.len(), 3);
}

#[test]
fn empty_source_is_empty_program() {
    assert_eq!(parse("").unwrap(), Program::default());
    assert_eq!(parse("@ only a comment").unwrap(), Program::default());
}
