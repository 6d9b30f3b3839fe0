use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{literal, rest, take_while};

use super::lexer::RESERVED_IF;

/// The two halves of a `<action> if <condition>;` line.
///
/// The action is not checked against the action vocabulary here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub action: &'a str,
    pub condition: &'a str,
}

impl<'a> Statement<'a> {
    /// Split a rule line into action and condition.
    ///
    /// Returns `None` unless the trimmed line is a word, whitespace, `if`,
    /// whitespace, a non-blank condition and a final `;`.
    #[must_use]
    pub fn split(line: &'a str) -> Option<Self> {
        let body = line.trim().strip_suffix(';')?;
        statement.parse(body).ok()
    }
}

fn ws1(input: &mut &str) -> ModalResult<()> {
    take_while(1.., char::is_whitespace)
        .void()
        .parse_next(input)
}

fn statement<'i>(input: &mut &'i str) -> ModalResult<Statement<'i>> {
    let action = take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .parse_next(input)?;
    ws1.parse_next(input)?;
    literal(RESERVED_IF).parse_next(input)?;
    ws1.parse_next(input)?;
    let condition = rest
        .verify(|s: &str| !s.trim().is_empty())
        .parse_next(input)?;
    Ok(Statement {
        action,
        condition: condition.trim(),
    })
}
