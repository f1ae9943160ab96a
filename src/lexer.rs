use core::fmt;

use log::warn;
use logos::Logos;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"[ \t\r\n\f\v]+")]
pub enum TokenKind {
    // At most one decimal point, a second one starts the next token
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]*")]
    Number,

    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Identifier,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Multiply,

    #[token("/")]
    Divide,

    #[token("%")]
    Modulo,

    #[token("=")]
    Assign,

    #[token("print")]
    Print,

    #[token("if")]
    If,

    #[token("else")]
    Else,

    #[token("for")]
    For,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token(";")]
    Semicolon,

    // Never matched by logos, produced by the wrapper once the source is exhausted
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::Divide => "'/'",
            Self::Modulo => "'%'",
            Self::Assign => "'='",
            Self::Print => "'print'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::For => "'for'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::Semicolon => "';'",
            Self::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lazily turns source text into tokens.
///
/// Characters outside the language are reported through `log::warn!` and
/// skipped, so lexing itself never fails. Once the source is exhausted every
/// further call to [`Lexer::next_token`] returns the end-of-input token.
pub struct Lexer<'a> {
    tokenizer: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { tokenizer: TokenKind::lexer(source) }
    }

    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            match self.tokenizer.next() {
                Some(Ok(kind)) => return Token::new(kind, self.tokenizer.slice()),
                Some(Err(())) => warn!("skipping unrecognized character '{}'", self.tokenizer.slice()),
                None => return Token::end_of_input(),
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::EndOfInput)).then_some(token)
    }
}
