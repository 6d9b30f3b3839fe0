//! Serialization of compiled rules into the `{ elements, result }` shape.
//!
//! An atomic condition is a three-string array, a connective is a bare string,
//! a group serializes as its content and a sequence as an array:
//!
//! ```json
//! {
//!   "elements": ["A", "B"],
//!   "result": { "show": [["A", "==", "enabled"], "&", ["B", "==", "checked"]] }
//! }
//! ```

use serde::ser::{Serialize, SerializeMap, SerializeSeq, SerializeStruct, Serializer};

use crate::{Action, AtomicCondition, Connective, ElementRegistry, Expr, RuleSet, Term};

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Connective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for AtomicCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.subject)?;
        seq.serialize_element(&self.operator)?;
        seq.serialize_element(&self.predicate)?;
        seq.end()
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expr::Atom(atom) => atom.serialize(serializer),
            Expr::Sequence(terms) => {
                let mut seq = serializer.serialize_seq(Some(terms.len()))?;
                for term in terms {
                    seq.serialize_element(term)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Atom(atom) => atom.serialize(serializer),
            Term::Connective(connective) => connective.serialize(serializer),
            Term::Group(inner) => inner.serialize(serializer),
        }
    }
}

impl Serialize for ElementRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for name in self.iter() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RuleSet", 2)?;
        state.serialize_field("elements", &self.elements)?;
        state.serialize_field("result", &ResultMap(&self.result))?;
        state.end()
    }
}

/// `result` as a map keyed by action name, in document order.
struct ResultMap<'a>(&'a [(Action, Expr)]);

impl Serialize for ResultMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (action, expr) in self.0 {
            map.serialize_entry(action, expr)?;
        }
        map.end()
    }
}
