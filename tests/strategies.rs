#![allow(dead_code)]

use proptest::prelude::*;

// --- Fixed layout ---
// Every generated condition refers only to these elements, so a validator
// built from KNOWN accepts any well-formed generated line.

pub const KNOWN: &[&str] = &["Name", "Age", "Agree", "Country", "Region_2"];
pub const PROPERTIES: &[&str] = &["enabled", "visible", "selected", "checked"];
pub const OPERATORS: &[&str] = &["==", "!=", ">=", "<="];
pub const ACTIONS: &[&str] = &[
    "enable", "disable", "show", "hide", "select", "unselect", "check", "uncheck",
];

/// A generated condition together with the element names it mentions,
/// in first-reference order.
#[derive(Debug, Clone)]
pub struct GenCondition {
    pub text: String,
    pub elements: Vec<String>,
}

impl GenCondition {
    fn leaf(subject: &str, text: String) -> Self {
        Self {
            text,
            elements: vec![subject.to_owned()],
        }
    }

    fn join(self, connective: &str, other: GenCondition) -> Self {
        let mut elements = self.elements;
        for name in other.elements {
            if !elements.contains(&name) {
                elements.push(name);
            }
        }
        Self {
            text: format!("{} {connective} {}", self.text, other.text),
            elements,
        }
    }

    fn group(self) -> Self {
        Self {
            text: format!("({})", self.text),
            elements: self.elements,
        }
    }
}

fn arb_predicate() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(PROPERTIES).prop_map(str::to_owned),
        (0_u32..1000).prop_map(|n| n.to_string()),
    ]
}

/// A well-formed `<element> <op> <predicate>` triple.
fn arb_atom() -> impl Strategy<Value = GenCondition> {
    (
        prop::sample::select(KNOWN),
        prop::sample::select(OPERATORS),
        arb_predicate(),
    )
        .prop_map(|(subject, op, predicate)| {
            GenCondition::leaf(subject, format!("{subject} {op} {predicate}"))
        })
}

/// Well-formed condition: atoms joined by `&`/`|`, optionally grouped, bounded depth.
pub fn arb_condition() -> impl Strategy<Value = GenCondition> {
    arb_atom().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(&["&", "|"][..]), inner.clone())
                .prop_map(|(a, c, b)| a.join(c, b)),
            inner.prop_map(GenCondition::group),
        ]
    })
}

/// A full `<action> if <condition>;` line.
pub fn arb_line() -> impl Strategy<Value = (String, GenCondition)> {
    (prop::sample::select(ACTIONS), arb_condition())
        .prop_map(|(action, cond)| (format!("{action} if {};", cond.text), cond))
}

/// Condition whose atoms may carry a bad operator or predicate, but which is
/// otherwise structurally valid (known subjects, whitelisted tokens, no truncation).
pub fn arb_sloppy_condition() -> impl Strategy<Value = String> {
    let op = prop::sample::select(&["==", "!=", ">=", "<=", "&", "|"][..]);
    let predicate = prop::sample::select(&["enabled", "checked", "7", "purple", "Name", "x1"][..]);
    let atom = (prop::sample::select(KNOWN), op, predicate)
        .prop_map(|(s, o, p)| format!("{s} {o} {p}"));
    (
        prop::collection::vec(atom, 1..5),
        prop::collection::vec(prop::sample::select(&["&", "|"][..]), 4),
    )
        .prop_map(|(atoms, connectives)| {
            let mut text = String::new();
            for (i, atom) in atoms.iter().enumerate() {
                if i > 0 {
                    text.push_str(&format!(" {} ", connectives[i - 1]));
                }
                text.push_str(atom);
            }
            text
        })
}
