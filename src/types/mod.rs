mod condition;
mod element_registry;
mod expr;
mod rule;
mod ruleset;

pub use condition::{looks_numeric, AtomicCondition, CompareOp, Predicate, Property};
pub use element_registry::ElementRegistry;
pub use expr::{element, Connective, ElementRef, Expr, Term};
pub use rule::{Action, Rule};
pub use ruleset::RuleSet;
