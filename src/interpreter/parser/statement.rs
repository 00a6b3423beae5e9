use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The statement form is chosen by the leading token:
/// - `var`, `if`, `while`, `for`, `fn` and `write` keywords,
/// - `import`, `from` and `embedded` directive keywords,
/// - an identifier followed by `=` (assignment),
/// - anything else is parsed as an expression statement, which covers bare
///   variable references and function calls.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek() else {
        return Err(ParseError::Expected { expected: "statement".to_string(),
                                          found:    Token::End.to_string(),
                                          line:     0, });
    };
    let line = *line;

    match token {
        Token::Var => parse_variable_declaration(tokens, line),
        Token::If => parse_if(tokens, line),
        Token::While => parse_while(tokens, line),
        Token::For => parse_for(tokens, line),
        Token::Fn => parse_function_definition(tokens, line),
        Token::Write => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            Ok(Statement::Write { expr, line })
        },
        Token::Import | Token::From => parse_import(tokens, line),
        Token::Embedded => parse_embedded(tokens, line),
        _ => {
            if let Some(statement) = parse_assignment(tokens)? {
                return Ok(statement);
            }
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier> = <expression>`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `var`.
/// - `line`: Line number of the `var` token.
///
/// # Returns
/// A `Statement::VarDecl`.
///
/// # Errors
/// Returns a `ParseError` if the identifier or `=` is missing, or the
/// initializer is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens, "variable name")?;
    expect_token(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::VarDecl { name, value, line })
}

/// Parses an assignment statement.
///
/// Supported form: `<identifier> = <expression>`.
///
/// The function performs a limited lookahead on a cloned cursor: an
/// assignment is parsed only if the next token is an identifier and the
/// following token is `=`.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assign))` for assignments,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), line)) = tokens.peek() else {
        return Ok(None);
    };
    let (name, line) = (name.clone(), *line);

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    tokens.next();
    tokens.next();
    let value = parse_expression(tokens)?;

    Ok(Some(Statement::Assign { name, value, line }))
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     if <condition> { ... } else { ... }
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// A `Statement::If`; the else branch is empty when absent.
///
/// # Errors
/// Propagates any errors from the condition or either block.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let condition = parse_expression(tokens)?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        parse_block(tokens)?
    } else {
        Vec::new()
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a `while` loop: `while <condition> { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses a ranged `for` loop.
///
/// Syntax: `for <identifier> in <start> .. <end> { ... }`
///
/// Both bounds are full expressions; the range operator `..` binds looser
/// than any arithmetic operator because no expression rule consumes it.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `for` keyword.
/// - `line`: Line number of the `for` token.
///
/// # Returns
/// A `Statement::For`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let var = parse_identifier(tokens, "loop variable")?;
    expect_token(tokens, &Token::In, "'in'")?;
    let start = parse_expression(tokens)?;
    expect_token(tokens, &Token::DotDot, "'..'")?;
    let end = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::For { var,
                        start,
                        end,
                        body,
                        line })
}

/// Parses a function definition.
///
/// Syntax: `fn <identifier> ( <params> ) { ... }` where `<params>` is a
/// possibly empty comma-separated list of identifiers.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `fn` keyword.
/// - `line`: Line number of the `fn` token.
///
/// # Returns
/// A `Statement::FuncDef` holding a shared [`FunctionDef`].
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>, line: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens, "function name")?;
    expect_token(tokens, &Token::LParen, "'('")?;
    let params = parse_comma_separated(tokens,
                                       |t| parse_identifier(t, "parameter name"),
                                       &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Statement::FuncDef(Rc::new(FunctionDef { name,
                                                params,
                                                body,
                                                line })))
}

/// Parses an `import` or `from` directive followed by its module name.
fn parse_import<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let is_from = matches!(tokens.next(), Some((Token::From, _)));
    let name = parse_identifier(tokens, "module name")?;

    if is_from {
        Ok(Statement::From { name, line })
    } else {
        Ok(Statement::Import { name, line })
    }
}

/// Parses an `embedded` directive: language identifier, then code string.
fn parse_embedded<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let language = parse_identifier(tokens, "language tag")?;
    let code = match tokens.next() {
        Some((Token::Str(code), _)) => code.clone(),
        Some((token, line)) => {
            return Err(ParseError::Expected { expected: "embedded code".to_string(),
                                              found:    token.to_string(),
                                              line:     *line, });
        },
        None => {
            return Err(ParseError::Expected { expected: "embedded code".to_string(),
                                              found:    Token::End.to_string(),
                                              line, });
        },
    };

    Ok(Statement::Embedded { language, code, line })
}
