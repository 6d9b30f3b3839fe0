use std::fmt;
use std::str::FromStr;

use super::condition::{AtomicCondition, CompareOp};
use super::element_registry::ElementRegistry;

/// Logical connective between two operands at the same nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "|",
        }
    }
}

impl FromStr for Connective {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "&" => Ok(Connective::And),
            "|" => Ok(Connective::Or),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed condition expression.
///
/// There is no precedence between `&` and `|`: a level of the expression is a
/// flat, ordered list of operands and connectives, exactly as written.
/// Parentheses are the only nesting mechanism and show up as [`Term::Group`].
///
/// A level holding exactly one operand is unwrapped, so a lone condition is an
/// [`Expr::Atom`] rather than a one-element sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Atom(AtomicCondition),
    Sequence(Vec<Term>),
}

/// One entry of an [`Expr::Sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Atom(AtomicCondition),
    Connective(Connective),
    Group(Expr),
}

impl Expr {
    /// Build an expression from the terms of one nesting level, unwrapping a
    /// single operand.
    #[must_use]
    pub fn from_terms(mut terms: Vec<Term>) -> Self {
        if terms.len() == 1 {
            match terms.pop() {
                Some(Term::Atom(atom)) => return Expr::Atom(atom),
                Some(Term::Group(inner)) => return inner,
                Some(other) => terms.push(other),
                None => {}
            }
        }
        Expr::Sequence(terms)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Sequence(terms) if terms.is_empty())
    }

    /// All atomic conditions, depth first, in source order.
    #[must_use]
    pub fn atoms(&self) -> Vec<&AtomicCondition> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'e>(&'e self, atoms: &mut Vec<&'e AtomicCondition>) {
        match self {
            Expr::Atom(atom) => atoms.push(atom),
            Expr::Sequence(terms) => {
                for term in terms {
                    match term {
                        Term::Atom(atom) => atoms.push(atom),
                        Term::Group(inner) => inner.collect_atoms(atoms),
                        Term::Connective(_) => {}
                    }
                }
            }
        }
    }

    /// Every element name referenced by this expression.
    #[must_use]
    pub fn elements(&self) -> ElementRegistry {
        let mut registry = ElementRegistry::new();
        for atom in self.atoms() {
            registry.register(&atom.subject);
        }
        registry
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(atom) => write!(f, "{atom}"),
            Expr::Sequence(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{term}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(atom) => write!(f, "{atom}"),
            Term::Connective(connective) => write!(f, "{connective}"),
            Term::Group(inner) => write!(f, "({inner})"),
        }
    }
}

impl From<AtomicCondition> for Expr {
    fn from(atom: AtomicCondition) -> Self {
        Expr::Atom(atom)
    }
}

impl From<AtomicCondition> for Term {
    fn from(atom: AtomicCondition) -> Self {
        Term::Atom(atom)
    }
}

impl From<Connective> for Term {
    fn from(connective: Connective) -> Self {
        Term::Connective(connective)
    }
}

/// Intermediate builder for an atomic condition on one element.
/// Created by [`element()`].
#[derive(Debug, Clone)]
pub struct ElementRef {
    name: String,
}

impl ElementRef {
    #[must_use]
    pub fn compare(self, op: CompareOp, predicate: impl fmt::Display) -> AtomicCondition {
        AtomicCondition::new(self.name, op.as_str(), predicate.to_string())
    }

    #[must_use]
    pub fn eq(self, predicate: impl fmt::Display) -> AtomicCondition {
        self.compare(CompareOp::Eq, predicate)
    }

    #[must_use]
    pub fn neq(self, predicate: impl fmt::Display) -> AtomicCondition {
        self.compare(CompareOp::Neq, predicate)
    }

    #[must_use]
    pub fn gte(self, predicate: impl fmt::Display) -> AtomicCondition {
        self.compare(CompareOp::Gte, predicate)
    }

    #[must_use]
    pub fn lte(self, predicate: impl fmt::Display) -> AtomicCondition {
        self.compare(CompareOp::Lte, predicate)
    }
}

#[must_use]
pub fn element(name: &str) -> ElementRef {
    ElementRef {
        name: name.to_owned(),
    }
}
