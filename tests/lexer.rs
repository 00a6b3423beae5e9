use nula::interpreter::lexer::{Token, TokenKind, tokenize};

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).into_iter().map(|(token, _)| token).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn stream_always_ends_with_end_marker() {
    assert_eq!(tokens(""), [Token::End]);
    assert_eq!(tokens("\n\n  \n"), [Token::End]);
    assert_eq!(tokens("write 1").last(), Some(&Token::End));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(tokens("if else while for fn var write in"),
               [Token::If,
                Token::Else,
                Token::While,
                Token::For,
                Token::Fn,
                Token::Var,
                Token::Write,
                Token::In,
                Token::End]);
    assert_eq!(tokens("iffy _x9 index"), [ident("iffy"), ident("_x9"), ident("index"), Token::End]);
    assert_eq!(Token::If.kind(), TokenKind::Keyword);
    assert_eq!(ident("x").kind(), TokenKind::Identifier);
}

#[test]
fn numbers_keep_raw_text_and_stop_before_ranges() {
    assert_eq!(tokens("3.14 42 .5"), [number("3.14"), number("42"), number(".5"), Token::End]);
    assert_eq!(tokens("0..10"), [number("0"), Token::DotDot, number("10"), Token::End]);
    assert_eq!(tokens("1.5..2"), [number("1.5"), Token::DotDot, number("2"), Token::End]);
    assert_eq!(Token::DotDot.kind(), TokenKind::Operator);
}

#[test]
fn strings_have_no_escapes_and_stop_at_line_end() {
    assert_eq!(tokens(r#"write "a b""#),
               [Token::Write, Token::Str("a b".to_string()), Token::End]);
    assert_eq!(tokens("write \"open\nwrite 1"),
               [Token::Write,
                Token::Str("open".to_string()),
                Token::Write,
                number("1"),
                Token::End]);
    assert_eq!(tokens(r#""a\n""#), [Token::Str(r"a\n".to_string()), Token::End]);
}

#[test]
fn operators_and_symbols() {
    assert_eq!(tokens("+ - * / ^ = < > ! & |"),
               [Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Caret,
                Token::Equals,
                Token::Less,
                Token::Greater,
                Token::Bang,
                Token::Ampersand,
                Token::Pipe,
                Token::End]);
    assert_eq!(tokens("( ) { } [ ] : ; ,"),
               [Token::LParen,
                Token::RParen,
                Token::LBrace,
                Token::RBrace,
                Token::LBracket,
                Token::RBracket,
                Token::Colon,
                Token::Semicolon,
                Token::Comma,
                Token::End]);
    assert_eq!(Token::Comma.kind(), TokenKind::Symbol);
}

#[test]
fn unknown_characters_are_dropped() {
    assert_eq!(tokens("x $ % ~ y"), [ident("x"), ident("y"), Token::End]);
    assert_eq!(tokens("# not embedded"), [ident("not"), ident("embedded"), Token::End]);
}

#[test]
fn comment_blocks_and_directive_comments_are_discarded() {
    assert_eq!(tokens("!\nwrite 1\nstill hidden\n!\nwrite 2"),
               [Token::Write, number("2"), Token::End]);
    assert_eq!(tokens("@ anything at all\nvar"), [Token::Var, Token::End]);
}

#[test]
fn import_and_from_lines() {
    assert_eq!(tokens("::math"), [Token::Import, ident("math"), Token::End]);
    assert_eq!(tokens(":: geometry  "), [Token::Import, ident("geometry"), Token::End]);
    assert_eq!(tokens("<io>"), [Token::From, ident("io"), Token::End]);
    assert_eq!(tokens("a < b"), [ident("a"), Token::Less, ident("b"), Token::End]);
    assert_eq!(Token::Import.kind(), TokenKind::Keyword);
}

#[test]
fn embedded_directive_yields_three_tokens() {
    assert_eq!(tokens("# =python= [print([1, 2])] trailing"),
               [Token::Embedded,
                ident("python"),
                Token::Str("print([1, 2])".to_string()),
                Token::End]);
}

#[test]
fn tokens_carry_their_line() {
    let lines: Vec<usize> = tokenize("var x = 1\n\n!\n!\nwrite x")
        .into_iter()
        .map(|(_, line)| line)
        .collect();

    assert_eq!(lines, [1, 1, 1, 1, 5, 5, 5]);
}

#[test]
fn malformed_numbers_split_at_the_second_dot() {
    assert_eq!(tokens("1.2.3"), [number("1.2"), number(".3"), Token::End]);
}

#[test]
fn hash_outside_a_directive_is_an_unknown_character() {
    assert_eq!(tokens("x # y"), [ident("x"), ident("y"), Token::End]);
    assert_eq!(tokens("#=python= [code]"),
               [Token::Equals,
                ident("python"),
                Token::Equals,
                Token::LBracket,
                ident("code"),
                Token::RBracket,
                Token::End]);
}
