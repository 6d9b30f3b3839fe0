use thiserror::Error;

/// Advisory warning raised while parsing an atomic condition.
///
/// Parsing carries on with the triple unchanged; the warning is handed to a
/// [`DiagnosticSink`] and never affects the parse result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("'{operator}' is not a valid operator for element '{subject}'")]
    InvalidOperator { subject: String, operator: String },

    #[error("'{predicate}' is not a valid property or number for element '{subject}'")]
    InvalidPredicate { subject: String, predicate: String },
}

/// Receiver for [`Diagnostic`]s. Reporting is fire-and-forget.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::InvalidOperator { subject, operator } => {
                tracing::warn!(%subject, %operator, "{diagnostic}");
            }
            Diagnostic::InvalidPredicate { subject, predicate } => {
                tracing::warn!(%subject, %predicate, "{diagnostic}");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
