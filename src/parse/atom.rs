use crate::types::AtomicCondition;

use super::error::ParseError;
use super::lexer::Token;
use super::sink::{Diagnostic, DiagnosticSink};

/// Consume the next three tokens as `(subject, operator, predicate)`.
///
/// The triple is returned as written even when the operator or predicate is
/// outside the allowed vocabulary; those cases are reported to `sink` instead.
///
/// # Errors
///
/// Returns [`ParseError::TruncatedCondition`] if fewer than three tokens remain.
/// Nothing is consumed in that case.
pub fn parse_atom(
    tokens: &mut &[Token<'_>],
    sink: &mut dyn DiagnosticSink,
) -> Result<AtomicCondition, ParseError> {
    let remaining = *tokens;
    let [subject, operator, predicate, rest @ ..] = remaining else {
        return Err(ParseError::TruncatedCondition {
            found: remaining.iter().map(ToString::to_string).collect(),
        });
    };
    *tokens = rest;

    let atom = AtomicCondition::new(subject.as_str(), operator.as_str(), predicate.as_str());
    if atom.compare_op().is_none() {
        sink.report(Diagnostic::InvalidOperator {
            subject: atom.subject.clone(),
            operator: atom.operator.clone(),
        });
    }
    if atom.predicate().is_none() {
        sink.report(Diagnostic::InvalidPredicate {
            subject: atom.subject.clone(),
            predicate: atom.predicate.clone(),
        });
    }
    Ok(atom)
}
