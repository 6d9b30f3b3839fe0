use crate::parse::{parse_condition, DiagnosticSink, Statement};
use crate::{Action, ElementRegistry, RuleSet};

pub(crate) fn compile(document: &str, sink: &mut dyn DiagnosticSink) -> RuleSet {
    let mut ruleset = RuleSet::default();

    for line in document.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(statement) = Statement::split(line) else {
            continue;
        };
        let Ok(action) = statement.action.parse::<Action>() else {
            continue;
        };

        let mut elements = ElementRegistry::new();
        match parse_condition(statement.condition, &mut elements, sink) {
            Ok(condition) => {
                // Elements of a rule that is later overwritten stay referenced.
                ruleset.elements.extend(&elements);
                ruleset.insert(action, condition);
            }
            Err(error) => {
                tracing::warn!(%line, %error, "skipping rule with unparsable condition");
            }
        }
    }

    tracing::debug!(
        rules = ruleset.len(),
        elements = ruleset.elements.len(),
        "compiled rule set"
    );
    ruleset
}
