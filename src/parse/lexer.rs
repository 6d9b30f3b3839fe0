use std::fmt;

use winnow::combinator::alt;
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::types::{looks_numeric, CompareOp, Connective};

/// Reserved word separating the action from its condition.
pub const RESERVED_IF: &str = "if";

/// A lexical token: a slice of the input, classified only when asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a>(&'a str);

/// Token classification computed by [`Token::kind()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,
    Compare(CompareOp),
    Connective(Connective),
    OpenParen,
    CloseParen,
    Reserved,
    Terminator,
    Other,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// A maximal `[A-Za-z0-9_]` run. Identifiers, numbers and `if` all have this shape.
    #[must_use]
    pub fn is_word(&self) -> bool {
        is_word(self.0)
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self.0 {
            "(" => TokenKind::OpenParen,
            ")" => TokenKind::CloseParen,
            ";" => TokenKind::Terminator,
            RESERVED_IF => TokenKind::Reserved,
            s => {
                if let Ok(op) = s.parse() {
                    TokenKind::Compare(op)
                } else if let Ok(connective) = s.parse() {
                    TokenKind::Connective(connective)
                } else if looks_numeric(s) {
                    TokenKind::Number
                } else if is_word(s) {
                    TokenKind::Identifier
                } else {
                    TokenKind::Other
                }
            }
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

/// Output of the lexer: either a token or a character no token rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'a> {
    Token(Token<'a>),
    Skipped(char),
}

// -- Grammar ----------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

fn symbol<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("==", "!=", ">=", "<=", "(", ")", "&", "|", "+", ";")).parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn lexeme<'i>(input: &mut &'i str) -> ModalResult<Lexeme<'i>> {
    alt((
        alt((symbol, word)).map(|s| Lexeme::Token(Token(s))),
        any.map(Lexeme::Skipped),
    ))
    .parse_next(input)
}

/// Iterator over the lexemes of a condition string. Never fails.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        ws.parse_next(&mut self.rest).ok()?;
        if self.rest.is_empty() {
            return None;
        }
        lexeme.parse_next(&mut self.rest).ok()
    }
}

/// Lex `input` into tokens and skipped characters, left to right.
#[must_use]
pub fn lexemes(input: &str) -> Lexer<'_> {
    Lexer { rest: input }
}

/// Lex `input` into tokens, dropping whitespace and unmatched characters.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    lexemes(input)
        .filter_map(|lexeme| match lexeme {
            Lexeme::Token(token) => Some(token),
            Lexeme::Skipped(_) => None,
        })
        .collect()
}
