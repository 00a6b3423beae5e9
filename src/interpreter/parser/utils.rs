use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token.
/// - `description`: How the token is named in the error, e.g. `"'}'"`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `ParseError::Expected` naming `description` and the token found.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((token, line)) => Err(ParseError::Expected { expected: description.to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }),
        None => Err(ParseError::Expected { expected: description.to_string(),
                                           found:    Token::End.to_string(),
                                           line:     0, }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function parameter lists and call argument
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::Expected { expected: format!("',' or {closing}"),
                                                  found:    tok.to_string(),
                                                  line:     *line, });
            },
            None => {
                return Err(ParseError::Expected { expected: format!("',' or {closing}"),
                                                  found:    Token::End.to_string(),
                                                  line:     0, });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `description`: What the identifier names, used in the error.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns `ParseError::Expected` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              description: &str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, line)) => Err(ParseError::Expected { expected: description.to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }),
        None => Err(ParseError::Expected { expected: description.to_string(),
                                           found:    Token::End.to_string(),
                                           line:     0, }),
    }
}
