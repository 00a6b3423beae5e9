use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and braces the parser accepts.
///
/// Every recursive rule of the grammar is entered through `(` or `{`, so this
/// also bounds the parser's recursion.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete token stream into a [`Program`].
///
/// Statements are parsed until the end marker. The first grammar violation
/// aborts parsing and is returned as-is. A stream nesting brackets deeper
/// than [`MAX_NESTING_DEPTH`] is rejected before parsing starts.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token stream produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The parsed program.
///
/// # Example
/// ```
/// use nula::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let program = parse_program(&tokenize("var x = 1\nwrite x")).unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse_program(&tokenize("write (1")).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    check_nesting(tokens)?;

    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some((token, _)) = iter.peek() {
        if *token == Token::End {
            break;
        }
        statements.push(parse_statement(&mut iter)?);
    }

    log::debug!("parsed {} top-level statements", statements.len());
    Ok(Program { statements })
}

/// Fails with `TooDeep` at the first `(` or `{` opened more than
/// [`MAX_NESTING_DEPTH`] levels deep.
fn check_nesting(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut depth = 0usize;
    for (token, line) in tokens {
        match token {
            Token::LParen | Token::LBrace => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::TooDeep { limit: MAX_NESTING_DEPTH,
                                                     line:  *line, });
                }
            },
            Token::RParen | Token::RBrace => depth = depth.saturating_sub(1),
            _ => {},
        }
    }
    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
