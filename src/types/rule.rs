use std::fmt;
use std::str::FromStr;

use super::expr::Expr;

/// What a rule does to the element it is attached to when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Enable,
    Disable,
    Show,
    Hide,
    Select,
    Unselect,
    Check,
    Uncheck,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Enable,
        Action::Disable,
        Action::Show,
        Action::Hide,
        Action::Select,
        Action::Unselect,
        Action::Check,
        Action::Uncheck,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::Show => "show",
            Action::Hide => "hide",
            Action::Select => "select",
            Action::Unselect => "unselect",
            Action::Check => "check",
            Action::Uncheck => "uncheck",
        }
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<action> if <condition>;` line after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub action: Action,
    pub condition: Expr,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} if {};", self.action, self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AtomicCondition;

    #[test]
    fn every_action_parses_from_its_name() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!("destroy".parse::<Action>().is_err());
        assert!("Show".parse::<Action>().is_err());
    }

    #[test]
    fn rule_renders_as_a_statement() {
        let rule = Rule {
            action: Action::Hide,
            condition: Expr::Atom(AtomicCondition::new("A", "==", "checked")),
        };
        assert_eq!(rule.to_string(), "hide if A == checked;");
    }
}
