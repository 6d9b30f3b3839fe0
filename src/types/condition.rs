use std::fmt;
use std::str::FromStr;

/// Comparison operators allowed between an element and its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Neq,
    Gte,
    Lte,
}

impl CompareOp {
    pub const ALL: [CompareOp; 4] = [CompareOp::Eq, CompareOp::Neq, CompareOp::Gte, CompareOp::Lte];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Neq => "!=",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Neq),
            ">=" => Ok(CompareOp::Gte),
            "<=" => Ok(CompareOp::Lte),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element states a condition can test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Enabled,
    Visible,
    Selected,
    Checked,
}

impl Property {
    pub const ALL: [Property; 4] = [
        Property::Enabled,
        Property::Visible,
        Property::Selected,
        Property::Checked,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Enabled => "enabled",
            Property::Visible => "visible",
            Property::Selected => "selected",
            Property::Checked => "checked",
        }
    }
}

impl FromStr for Property {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Property::Enabled),
            "visible" => Ok(Property::Visible),
            "selected" => Ok(Property::Selected),
            "checked" => Ok(Property::Checked),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of an atomic condition: a property name or a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    Property(Property),
    Number(&'a str),
}

impl<'a> Predicate<'a> {
    /// Classify a predicate token. Returns `None` for anything that is neither
    /// a known property nor numeric-looking.
    #[must_use]
    pub fn classify(text: &'a str) -> Option<Self> {
        if let Ok(property) = text.parse::<Property>() {
            Some(Predicate::Property(property))
        } else if looks_numeric(text) {
            Some(Predicate::Number(text))
        } else {
            None
        }
    }
}

/// A run of ASCII digits. The lexer never produces signs, exponents or
/// decimal points inside a token, so nothing else can reach a predicate slot.
#[must_use]
pub fn looks_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// One `<element> <operator> <predicate>` triple.
///
/// The parts are stored verbatim so that a malformed triple survives a lenient
/// parse unchanged; [`compare_op`](Self::compare_op) and
/// [`predicate`](Self::predicate) give the typed view when it is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicCondition {
    pub subject: String,
    pub operator: String,
    pub predicate: String,
}

impl AtomicCondition {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        operator: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            operator: operator.into(),
            predicate: predicate.into(),
        }
    }

    #[must_use]
    pub fn compare_op(&self) -> Option<CompareOp> {
        self.operator.parse().ok()
    }

    #[must_use]
    pub fn predicate(&self) -> Option<Predicate<'_>> {
        Predicate::classify(&self.predicate)
    }

    /// Whether both the operator and the predicate come from the allowed vocabularies.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.compare_op().is_some() && self.predicate().is_some()
    }
}

impl fmt::Display for AtomicCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.operator, self.predicate)
    }
}
