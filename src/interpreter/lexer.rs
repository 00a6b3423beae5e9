use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The `*Directive` variants are produced by the line-level forms (`::name`,
/// `<name>`, `# =lang= [code]`) and are expanded by [`tokenize`] into a
/// keyword token followed by its operands; they never reach the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\f\r]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`, kept as raw
    /// text.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens. The quotes are not part of the value.
    #[token("\"", string_literal)]
    Str(String),
    /// Identifier tokens; variable, function, language or module names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `var`
    #[token("var")]
    Var,
    /// `write`
    #[token("write")]
    Write,
    /// `in`
    #[token("in")]
    In,
    /// `import`, emitted for `::name` lines.
    Import,
    /// `from`, emitted for `<name>` lines.
    From,
    /// `embedded`, emitted for `# =lang= [code]` lines.
    Embedded,
    /// `::name` up to the end of the line.
    #[token("::", module_path)]
    ImportDirective(String),
    /// `<name>` closing the line.
    FromDirective(String),
    /// `# =lang= [code]`. Any other `#` is an unknown character.
    #[token("#", embedded_directive)]
    EmbeddedDirective(EmbeddedSource),
    /// `..`
    #[token("..")]
    DotDot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`, unless the rest of the line reads `name>`.
    #[token("<", less_or_module)]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// End-of-stream marker; always the last token of a stream.
    End,
}

/// The language tag and code captured from an embedded directive.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EmbeddedSource {
    /// Language tag between the `=` signs.
    pub language: String,
    /// Everything between the first `[` and the last `]`.
    pub code:     String,
}

/// Broad classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Variable, function, module or language names.
    Identifier,
    /// Numeric literals.
    Number,
    /// String literals.
    String,
    /// `+ - * / ^ = < > ! & |` and `..`.
    Operator,
    /// `if else while for fn var write in import from embedded`.
    Keyword,
    /// `( ) { } [ ] : ; ,`.
    Symbol,
    /// End of the stream.
    End,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The line number of the source line being tokenized.
    pub line: usize,
}

impl Token {
    /// Returns the broad kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::String,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::If
            | Self::Else
            | Self::While
            | Self::For
            | Self::Fn
            | Self::Var
            | Self::Write
            | Self::In
            | Self::Import
            | Self::From
            | Self::Embedded
            | Self::ImportDirective(_)
            | Self::FromDirective(_)
            | Self::EmbeddedDirective(_) => TokenKind::Keyword,
            Self::DotDot
            | Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Caret
            | Self::Equals
            | Self::Less
            | Self::Greater
            | Self::Bang
            | Self::Ampersand
            | Self::Pipe => TokenKind::Operator,
            Self::LParen
            | Self::RParen
            | Self::LBrace
            | Self::RBrace
            | Self::LBracket
            | Self::RBracket
            | Self::Colon
            | Self::Semicolon
            | Self::Comma => TokenKind::Symbol,
            Self::End => TokenKind::End,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Number(text) | Self::Identifier(text) => return write!(f, "'{text}'"),
            Self::Str(text) => return write!(f, "\"{text}\""),
            Self::ImportDirective(name) => return write!(f, "'::{name}'"),
            Self::FromDirective(name) => return write!(f, "'<{name}>'"),
            Self::EmbeddedDirective(src) => return write!(f, "'# ={}= [...]'", src.language),
            Self::End => return write!(f, "end of input"),
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Fn => "fn",
            Self::Var => "var",
            Self::Write => "write",
            Self::In => "in",
            Self::Import => "import",
            Self::From => "from",
            Self::Embedded => "embedded",
            Self::DotDot => "..",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Equals => "=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Bang => "!",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Comma => ",",
        };
        write!(f, "'{text}'")
    }
}

/// Converts source text into a token stream terminated by [`Token::End`].
///
/// The source is processed line by line:
/// - blank lines are skipped,
/// - a line starting with `!` opens a comment that the next line containing
///   `!` closes,
/// - a line starting with `@` is a directive comment,
/// - every other line is tokenized; unknown characters are dropped.
///
/// Each token is paired with its 1-based line number. Tokenization never
/// fails.
///
/// # Example
/// ```
/// use nula::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("var x = 1..2");
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            [&Token::Var,
///             &Token::Identifier("x".into()),
///             &Token::Equals,
///             &Token::Number("1".into()),
///             &Token::DotDot,
///             &Token::Number("2".into()),
///             &Token::End]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut in_comment = false;
    let mut last_line = 1;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        last_line = line;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continue;
        }
        if in_comment {
            if trimmed.contains('!') {
                in_comment = false;
            }
            continue;
        }
        if trimmed.starts_with('!') {
            in_comment = true;
            continue;
        }
        if trimmed.starts_with('@') {
            continue;
        }

        let mut lexer = Token::lexer_with_extras(trimmed, LexerExtras { line });
        while let Some(result) = lexer.next() {
            let Ok(token) = result else {
                continue;
            };
            let line = lexer.extras.line;

            match token {
                Token::ImportDirective(name) => {
                    tokens.push((Token::Import, line));
                    if !name.is_empty() {
                        tokens.push((Token::Identifier(name), line));
                    }
                },
                Token::FromDirective(name) => {
                    tokens.push((Token::From, line));
                    tokens.push((Token::Identifier(name), line));
                },
                Token::EmbeddedDirective(EmbeddedSource { language, code }) => {
                    tokens.push((Token::Embedded, line));
                    tokens.push((Token::Identifier(language), line));
                    tokens.push((Token::Str(code), line));
                },
                other => tokens.push((other, line)),
            }
        }
    }

    tokens.push((Token::End, last_line));
    log::debug!("lexed {} tokens", tokens.len());
    tokens
}

/// Consumes a string literal after its opening quote.
///
/// The literal ends at the next `"`. An unterminated literal runs to the end
/// of the line. No escape sequences are recognized.
fn string_literal(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder();
    if let Some(end) = rest.find('"') {
        let text = rest[..end].to_string();
        lex.bump(end + 1);
        text
    } else {
        let text = rest.to_string();
        lex.bump(text.len());
        text
    }
}

/// Consumes the rest of the line after `::` and returns the module name.
fn module_path(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder();
    let name = rest.trim_start_matches(':').trim().to_string();
    lex.bump(rest.len());
    name
}

/// Disambiguates `<` between the less-than operator and a `<name>` line.
fn less_or_module(lex: &mut logos::Lexer<Token>) -> Token {
    let rest = lex.remainder();
    if let Some(name) = rest.trim_end().strip_suffix('>')
       && !name.is_empty()
       && !name.contains(['<', '>'])
       && !name.contains(char::is_whitespace)
    {
        let name = name.to_string();
        lex.bump(rest.len());
        return Token::FromDirective(name);
    }
    Token::Less
}

/// Recognizes `# =lang= [code]` at the current `#`.
///
/// The language tag must be a word (`[A-Za-z0-9_]+`) and the code runs to the
/// last `]` on the line. Anything after that `]` is discarded. A `#` that does
/// not start such a directive yields `None`, which logos reports as an error
/// and [`tokenize`] drops like any other unknown character.
fn embedded_directive(lex: &mut logos::Lexer<Token>) -> Option<EmbeddedSource> {
    let rest = lex.remainder();
    let after_eq = rest.strip_prefix(" =")?;
    let tag_end = after_eq.find('=')?;
    let language = &after_eq[..tag_end];
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let body = after_eq[tag_end + 1..].strip_prefix(" [")?;
    let code_end = body.rfind(']')?;

    let source = EmbeddedSource { language: language.to_string(),
                                  code:     body[..code_end].to_string(), };
    lex.bump(rest.len());
    Some(source)
}
