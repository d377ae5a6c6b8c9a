//! Lexer for the sentence and sequent surface syntax.
//!
//! Tokenizes the object language using logos. Whitespace is skipped between
//! tokens, as are `#`-to-end-of-line comments (batch files use them).

use logos::Logos;

use crate::error::ParseError;

/// Surface tokens.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    #[token("ALL")]
    All,

    #[token("SOME")]
    Some,

    /// `[A-Za-z_][A-Za-z0-9_]*`
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),

    #[token("~")]
    Tilde,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    /// The `tell` separator.
    #[token("|~")]
    Turnstile,

    #[token("->")]
    Arrow,

    /// The sequent separator.
    #[token("=>")]
    DoubleArrow,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,
}

impl Token {
    /// Short description used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::All => "`ALL`".to_string(),
            Token::Some => "`SOME`".to_string(),
            Token::Ident(name) => format!("identifier `{name}`"),
            Token::Tilde => "`~`".to_string(),
            Token::Amp => "`&`".to_string(),
            Token::Pipe => "`|`".to_string(),
            Token::Turnstile => "`|~`".to_string(),
            Token::Arrow => "`->`".to_string(),
            Token::DoubleArrow => "`=>`".to_string(),
            Token::LParen => "`(`".to_string(),
            Token::RParen => "`)`".to_string(),
            Token::Comma => "`,`".to_string(),
            Token::Dot => "`.`".to_string(),
        }
    }
}

/// Tokenize `source`, pairing each token with its byte range.
///
/// # Errors
///
/// Returns a [`ParseError`] at the offset of the first unrecognized
/// character.
pub fn lex(source: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>, ParseError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(ParseError::new("unrecognized character", span.start));
            }
        }
    }
    Ok(tokens)
}
