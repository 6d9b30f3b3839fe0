use thiserror::Error;

/// Errors produced when parsing a condition into an [`Expr`](crate::Expr).
///
/// Parsing is lenient: malformed operators and predicates are only reported as
/// [`Diagnostic`](super::Diagnostic)s. These are the cases where no triple can be
/// built at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("incomplete condition: expected '<element> <operator> <predicate>', found '{}'", found.join(" "))]
    TruncatedCondition { found: Vec<String> },

    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
