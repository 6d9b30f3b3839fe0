//! Conditional rules for dialog layouts.
//!
//! A rule document has one rule per line, `<action> if <condition>;`, where the
//! condition compares other elements' states:
//!
//! ```text
//! enable if Agree == checked;
//! show if (Country == selected | Region == selected) & Age >= 18;
//! ```
//!
//! [`Validator`] rejects a document at its first bad line; [`RuleSet`] compiles a
//! document into one [`Expr`] per [`Action`] plus the elements it depends on.

mod compile;
mod error;
pub mod parse;
#[cfg(feature = "serde")]
mod serial;
mod types;
mod validate;

pub use error::Error;
pub use types::{
    element, looks_numeric, Action, AtomicCondition, CompareOp, Connective, ElementRef,
    ElementRegistry, Expr, Predicate, Property, Rule, RuleSet, Term,
};
pub use validate::{LineError, ValidationError, Validator};
