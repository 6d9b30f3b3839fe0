use crate::types::{ElementRegistry, Expr, Term};

use super::atom::parse_atom;
use super::error::ParseError;
use super::lexer::{tokenize, Token, TokenKind};
use super::sink::DiagnosticSink;

/// Deepest parenthesised group the parser descends into.
pub const MAX_NESTING: usize = 64;

/// Tokenize and parse a bare condition (the part between `if` and `;`).
///
/// # Errors
///
/// See [`parse_expression()`].
pub fn parse_condition(
    condition: &str,
    elements: &mut ElementRegistry,
    sink: &mut dyn DiagnosticSink,
) -> Result<Expr, ParseError> {
    let tokens = tokenize(condition);
    let mut cursor = tokens.as_slice();
    parse_expression(&mut cursor, elements, sink)
}

/// Parse one nesting level of a condition from the front of `tokens`.
///
/// Stops at the end of input or at a `)`, which is left for the caller. The
/// subject of every atomic condition is registered in `elements`.
/// Tokens that cannot start an operand are skipped.
///
/// # Errors
///
/// Returns [`ParseError::TruncatedCondition`] when an operand has fewer than
/// three tokens left, and [`ParseError::NestingTooDeep`] past [`MAX_NESTING`].
pub fn parse_expression(
    tokens: &mut &[Token<'_>],
    elements: &mut ElementRegistry,
    sink: &mut dyn DiagnosticSink,
) -> Result<Expr, ParseError> {
    parse_level(tokens, elements, sink, 0)
}

fn parse_level(
    tokens: &mut &[Token<'_>],
    elements: &mut ElementRegistry,
    sink: &mut dyn DiagnosticSink,
    depth: usize,
) -> Result<Expr, ParseError> {
    let mut terms = Vec::new();

    loop {
        let remaining = *tokens;
        let Some((token, rest)) = remaining.split_first() else {
            break;
        };
        match token.kind() {
            TokenKind::OpenParen => {
                if depth >= MAX_NESTING {
                    return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
                }
                *tokens = rest;
                let inner = parse_level(tokens, elements, sink, depth + 1)?;
                let after = *tokens;
                if let Some((close, rest)) = after.split_first() {
                    if close.kind() == TokenKind::CloseParen {
                        *tokens = rest;
                    }
                }
                terms.push(Term::Group(inner));
            }
            TokenKind::CloseParen => break,
            TokenKind::Connective(connective) => {
                *tokens = rest;
                terms.push(Term::Connective(connective));
            }
            _ if token.is_word() => {
                let atom = parse_atom(tokens, sink)?;
                elements.register(&atom.subject);
                terms.push(Term::Atom(atom));
            }
            _ => *tokens = rest,
        }
    }

    Ok(Expr::from_terms(terms))
}
