use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
    util::num::parse_number,
};

/// Parses a primary expression.
///
/// Primary expressions are the atoms of the grammar:
/// - number literals,
/// - string literals,
/// - variable references and function calls,
/// - parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | IDENT ("(" arguments ")")? | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed primary expression.
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start an expression.
/// - `Expected` if a parenthesized expression or call is not closed.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(text), line)) => Ok(Expr::NumberLiteral { value: parse_number(text),
                                                                      line:  *line, }),
        Some((Token::Str(value), line)) => Ok(Expr::StringLiteral { value: value.clone(),
                                                                    line:  *line, }),
        Some((Token::Identifier(name), line)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::FuncCall { name: name.clone(),
                                           arguments,
                                           line: *line });
            }
            Ok(Expr::VarRef { name: name.clone(),
                              line: *line, })
        },
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedToken { token: Token::End.to_string(),
                                                  line:  0, }),
    }
}
