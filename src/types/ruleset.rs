use super::element_registry::ElementRegistry;
use super::expr::Expr;
use super::rule::{Action, Rule};
use crate::parse::{DiagnosticSink, TracingSink};

/// Compiled rule document: one condition per action plus every element the
/// conditions depend on.
///
/// Produced by [`RuleSet::from_document()`] (no validation) or by
/// [`Validator::load()`](crate::Validator::load) (validate, then compile).
///
/// # Example
///
/// ```
/// use condrule::{Action, RuleSet};
///
/// let ruleset = RuleSet::from_document("show if Name == checked;\nhide if Age <= 17;");
/// assert_eq!(ruleset.len(), 2);
/// assert!(ruleset.get(Action::Show).is_some());
/// assert_eq!(ruleset.elements().iter().collect::<Vec<_>>(), ["Name", "Age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub(crate) elements: ElementRegistry,
    /// At most one entry per action, in order of the action's first rule.
    pub(crate) result: Vec<(Action, Expr)>,
}

impl RuleSet {
    /// Compile a rule document, reporting malformed atoms through `tracing`.
    ///
    /// Lines that do not have the `<action> if <condition>;` shape are skipped.
    /// A line whose condition cannot be parsed at all is skipped too; run a
    /// [`Validator`](crate::Validator) first to reject such documents.
    #[must_use]
    pub fn from_document(document: &str) -> Self {
        Self::from_document_with(document, &mut TracingSink)
    }

    /// Compile a rule document, reporting malformed atoms to `sink`.
    #[must_use]
    pub fn from_document_with(document: &str, sink: &mut dyn DiagnosticSink) -> Self {
        crate::compile::compile(document, sink)
    }

    /// Read a rule document from disk and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::Error> {
        let document = std::fs::read_to_string(path)?;
        Ok(Self::from_document(&document))
    }

    /// The condition governing `action`, if the document has one.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<&Expr> {
        self.result
            .iter()
            .find(|(candidate, _)| *candidate == action)
            .map(|(_, expr)| expr)
    }

    /// Actions with a rule, in the order they first appear in the document.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.result.iter().map(|(action, _)| *action)
    }

    /// Rules as `(action, condition)` pairs, in the order of [`RuleSet::actions()`].
    pub fn iter(&self) -> impl Iterator<Item = (Action, &Expr)> {
        self.result.iter().map(|(action, expr)| (*action, expr))
    }

    /// Owned [`Rule`] values, one per action.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        self.iter()
            .map(|(action, condition)| Rule {
                action,
                condition: condition.clone(),
            })
            .collect()
    }

    /// Every element referenced by any rule, in first-reference order.
    #[must_use]
    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.result.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Set the condition for `action`. A later rule for the same action
    /// replaces the earlier condition but keeps its position.
    pub(crate) fn insert(&mut self, action: Action, condition: Expr) {
        match self.result.iter_mut().find(|(candidate, _)| *candidate == action) {
            Some((_, existing)) => *existing = condition,
            None => self.result.push((action, condition)),
        }
    }
}
