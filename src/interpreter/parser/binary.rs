use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = *line;
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinOp { left: Box::new(left),
                             op,
                             right: Box::new(right),
                             line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_power(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let line = *line;
        tokens.next();
        let right = parse_power(tokens)?;
        left = Expr::BinOp { left: Box::new(left),
                             op,
                             right: Box::new(right),
                             line };
    }
    Ok(left)
}

/// Parses exponentiation.
///
/// The power operator takes exactly one primary on each side and does not
/// chain: `a ^ b ^ c` parses `a ^ b` and leaves `^ c` unconsumed, which the
/// caller then rejects. Parenthesize to nest powers.
///
/// The rule is: `power := primary ("^" primary)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A primary expression or a single `^` node.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let exponent = parse_primary(tokens)?;
        return Ok(Expr::BinOp { left: Box::new(base),
                                op: BinaryOperator::Pow,
                                right: Box::new(exponent),
                                line });
    }

    Ok(base)
}

/// Maps a token to its binary operator, if it is one.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
