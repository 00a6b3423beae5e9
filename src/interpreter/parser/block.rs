use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a block delimited by braces.
///
/// Statements are parsed until a closing `}` token. Running into the end of
/// the stream first is an error naming the missing brace.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements inside the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    while let Some((token, _)) = tokens.peek()
          && !matches!(token, Token::RBrace | Token::End)
    {
        statements.push(parse_statement(tokens)?);
    }

    expect_token(tokens, &Token::RBrace, "'}'")?;
    Ok(statements)
}
