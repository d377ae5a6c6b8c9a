//! Recursive-descent parser for sentences and sequents.
//!
//! One-token lookahead over the fixed precedence grammar
//! (`~` > `&` > `|` > `->`; `->` right-associative, `&`/`|`
//! left-associative):
//!
//! ```text
//! sentence ::= impl
//! impl     ::= disj ('->' disj)*
//! disj     ::= conj ('|'  conj)*
//! conj     ::= unary ('&'  unary)*
//! unary    ::= '~' unary | atom | '(' sentence ')'
//! atom     ::= IDENT
//!           |  IDENT '(' IDENT ')'
//!           |  IDENT '(' IDENT ',' IDENT ')'
//!           |  'ALL'  IDENT '.' IDENT '(' IDENT ')'
//!           |  'SOME' IDENT '.' IDENT '(' IDENT ')'
//! ```
//!
//! The atom production is mode-dependent: propositional mode accepts only
//! bare identifiers; RQ mode requires concept/role forms and rejects bare
//! identifiers.

use std::ops::Range;

use crate::error::ParseError;
use crate::sentence::Sentence;
use crate::sequent::{Sequent, SentenceSet};
use crate::syntax::lexer::{lex, Token};

/// Atom grammar selection. A parameter of every parse entry point, not a
/// global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Atoms are bare identifiers; concept/role/quantifier forms are
    /// rejected.
    #[default]
    Propositional,
    /// Atoms are concept or role assertions; bare identifiers are rejected.
    Rq,
}

/// Parse a single sentence; trailing input is an error.
pub fn parse_sentence(source: &str, mode: Mode) -> Result<Sentence, ParseError> {
    let mut parser = Parser::new(source, mode)?;
    let sentence = parser.sentence()?;
    parser.finish()?;
    Ok(sentence)
}

/// Parse a query sequent `Γ => Δ`. Either comma-separated list may be empty.
pub fn parse_sequent(source: &str, mode: Mode) -> Result<Sequent, ParseError> {
    let mut parser = Parser::new(source, mode)?;
    parser.split(Token::DoubleArrow)
}

/// Parse a `tell` statement `Γ |~ Δ`.
pub fn parse_consequence(source: &str, mode: Mode) -> Result<Sequent, ParseError> {
    let mut parser = Parser::new(source, mode)?;
    parser.split(Token::Turnstile)
}

struct Parser {
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    mode: Mode,
    end: usize,
}

impl Parser {
    fn new(source: &str, mode: Mode) -> Result<Self, ParseError> {
        Ok(Parser {
            tokens: lex(source)?,
            pos: 0,
            mode,
            end: source.len(),
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Byte offset of the current token, or end of input.
    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.end)
    }

    fn at(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.at(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, context: &str) -> Result<(), ParseError> {
        if self.eat(&token) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected {} {context}", token.describe())))
        }
    }

    fn expect_ident(&mut self, context: &str) -> Result<String, ParseError> {
        match self.peek() {
            Some(Token::Ident(_)) => {
                let Some(Token::Ident(name)) = self.bump() else {
                    unreachable!("peeked an identifier");
                };
                Ok(name)
            }
            _ => Err(self.unexpected(&format!("expected identifier {context}"))),
        }
    }

    fn unexpected(&self, message: &str) -> ParseError {
        let found = match self.peek() {
            Some(token) => format!(", found {}", token.describe()),
            None => ", found end of input".to_string(),
        };
        ParseError::new(format!("{message}{found}"), self.position())
    }

    fn finish(&self) -> Result<(), ParseError> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(self.unexpected("expected end of input"))
        }
    }

    fn sentence(&mut self) -> Result<Sentence, ParseError> {
        self.implication()
    }

    fn implication(&mut self) -> Result<Sentence, ParseError> {
        let left = self.disjunction()?;
        if self.eat(&Token::Arrow) {
            let right = self.implication()?;
            Ok(Sentence::implies(left, right))
        } else {
            Ok(left)
        }
    }

    fn disjunction(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.conjunction()?;
        while self.eat(&Token::Pipe) {
            let right = self.conjunction()?;
            left = Sentence::or(left, right);
        }
        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Sentence, ParseError> {
        let mut left = self.unary()?;
        while self.eat(&Token::Amp) {
            let right = self.unary()?;
            left = Sentence::and(left, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Sentence, ParseError> {
        if self.eat(&Token::Tilde) {
            return Ok(Sentence::not(self.unary()?));
        }
        if self.eat(&Token::LParen) {
            let inner = self.sentence()?;
            self.expect(Token::RParen, "to close the parenthesized sentence")?;
            return Ok(inner);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Sentence, ParseError> {
        match self.peek() {
            Some(Token::All) => self.quantified(true),
            Some(Token::Some) => self.quantified(false),
            Some(Token::Ident(_)) => {
                let name = self.expect_ident("")?;
                match self.mode {
                    Mode::Propositional => {
                        if self.at(&Token::LParen) {
                            return Err(self.unexpected(
                                "concept and role atoms require restricted-quantifier mode",
                            ));
                        }
                        Ok(Sentence::atom(name))
                    }
                    Mode::Rq => {
                        if !self.eat(&Token::LParen) {
                            return Err(self.unexpected(
                                "bare atoms are propositional-only; expected `(` after identifier",
                            ));
                        }
                        let first = self.expect_ident("inside the atom")?;
                        if self.eat(&Token::Comma) {
                            let second = self.expect_ident("as the role object")?;
                            self.expect(Token::RParen, "to close the role atom")?;
                            Ok(Sentence::role(name, first, second))
                        } else {
                            self.expect(Token::RParen, "to close the concept atom")?;
                            Ok(Sentence::concept(name, first))
                        }
                    }
                }
            }
            _ => Err(self.unexpected("expected a sentence")),
        }
    }

    fn quantified(&mut self, universal: bool) -> Result<Sentence, ParseError> {
        if self.mode == Mode::Propositional {
            return Err(self.unexpected(
                "restricted quantifiers require restricted-quantifier mode",
            ));
        }
        // Consume ALL or SOME.
        self.bump();
        let role = self.expect_ident("as the quantifier role")?;
        self.expect(Token::Dot, "between role and concept")?;
        let concept = self.expect_ident("as the quantifier concept")?;
        self.expect(Token::LParen, "before the quantified individual")?;
        let individual = self.expect_ident("as the quantified individual")?;
        self.expect(Token::RParen, "to close the quantifier")?;
        if universal {
            Ok(Sentence::all(role, concept, individual))
        } else {
            Ok(Sentence::some(role, concept, individual))
        }
    }

    /// `sentences? SEP sentences?`; both comma-separated lists may be empty.
    fn split(&mut self, separator: Token) -> Result<Sequent, ParseError> {
        let mut antecedent = SentenceSet::new();
        if !self.at(&separator) && self.peek().is_some() {
            loop {
                antecedent.insert(self.sentence()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect(separator, "between antecedent and succedent")?;
        let mut succedent = SentenceSet::new();
        if self.peek().is_some() {
            loop {
                succedent.insert(self.sentence()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        self.finish()?;
        Ok(Sequent::new(antecedent, succedent))
    }
}
