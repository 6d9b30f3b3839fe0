use std::collections::HashSet;

use thiserror::Error;

use crate::parse::{
    lexemes, parse_condition, tokenize, Diagnostic, Lexeme, ParseError, Statement, Token,
    TokenKind,
};
use crate::types::{Action, CompareOp, ElementRegistry, Predicate};
use crate::RuleSet;

/// Why a rule line was rejected. Variants are listed in the order the checks run;
/// only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing ';' at end of rule")]
    MissingTerminator,

    #[error("rule must have the form '<action> if <condition>;'")]
    MalformedStatement,

    #[error("unknown action '{action}'")]
    UnknownAction { action: String },

    #[error("unbalanced parentheses in condition")]
    UnbalancedParentheses,

    #[error("token '{token}' is not allowed in a condition")]
    DisallowedToken { token: String },

    #[error("could not parse condition: {0}")]
    Parse(#[from] ParseError),

    #[error("{}", unknown_elements_message(names))]
    UnknownElements { names: Vec<String> },

    #[error("'{operator}' is not a valid operator for element '{subject}'")]
    InvalidOperator { subject: String, operator: String },

    #[error("'{predicate}' is not a valid property or number for element '{subject}'")]
    InvalidPredicate { subject: String, predicate: String },
}

fn unknown_elements_message(names: &[String]) -> String {
    match names {
        [name] => format!("element '{name}' does not exist"),
        _ => format!("elements '{}' do not exist", names.join(", ")),
    }
}

impl From<Diagnostic> for ValidationError {
    fn from(diagnostic: Diagnostic) -> Self {
        match diagnostic {
            Diagnostic::InvalidOperator { subject, operator } => {
                ValidationError::InvalidOperator { subject, operator }
            }
            Diagnostic::InvalidPredicate { subject, predicate } => {
                ValidationError::InvalidPredicate { subject, predicate }
            }
        }
    }
}

/// First failing line of a rule document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based line number in the document.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    pub source: ValidationError,
}

/// Checks rule lines against the grammar and a set of known element names.
///
/// # Example
///
/// ```
/// use condrule::{ValidationError, Validator};
///
/// let validator = Validator::new(["Name", "Age"]);
/// assert!(validator.validate_line("show if Name == checked;").is_ok());
/// assert_eq!(
///     validator.validate_line("show if Email == checked;"),
///     Err(ValidationError::UnknownElements { names: vec!["Email".into()] })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    known: HashSet<String>,
}

impl Validator {
    #[must_use]
    pub fn new<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: elements.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, name: impl Into<String>) -> Self {
        self.known.insert(name.into());
        self
    }

    #[must_use]
    pub fn knows(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    pub fn known_elements(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    /// Validate a single rule line.
    ///
    /// On success returns the elements the condition references.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking in variant order.
    pub fn validate_line(&self, line: &str) -> Result<ElementRegistry, ValidationError> {
        let line = line.trim();
        if !line.ends_with(';') {
            return Err(ValidationError::MissingTerminator);
        }
        let statement = Statement::split(line).ok_or(ValidationError::MalformedStatement)?;
        if statement.action.parse::<Action>().is_err() {
            return Err(ValidationError::UnknownAction {
                action: statement.action.to_owned(),
            });
        }

        let condition = statement.condition;
        check_parentheses(condition)?;
        check_tokens(condition)?;

        let mut elements = ElementRegistry::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        parse_condition(condition, &mut elements, &mut diagnostics)?;
        for diagnostic in &diagnostics {
            tracing::debug!(%diagnostic, "advisory from condition parse");
        }

        let missing: Vec<String> = elements
            .iter()
            .filter(|name| !self.knows(name))
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::UnknownElements { names: missing });
        }

        check_atoms(&tokenize(condition))?;
        Ok(elements)
    }

    /// Validate every non-blank line of a rule document, stopping at the first
    /// failing line.
    ///
    /// On success returns the elements referenced anywhere in the document.
    ///
    /// # Errors
    ///
    /// Returns a [`LineError`] for the first line that fails validation.
    pub fn validate(&self, document: &str) -> Result<ElementRegistry, LineError> {
        let mut elements = ElementRegistry::new();
        for (idx, raw) in document.lines().enumerate() {
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            match self.validate_line(text) {
                Ok(referenced) => elements.extend(&referenced),
                Err(source) => {
                    tracing::debug!(line = idx + 1, %source, "rejected rule line");
                    return Err(LineError {
                        line: idx + 1,
                        text: text.to_owned(),
                        source,
                    });
                }
            }
        }
        Ok(elements)
    }

    /// Validate a rule document and compile it into a [`RuleSet`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) for the first invalid line.
    pub fn load(&self, document: &str) -> Result<RuleSet, crate::Error> {
        self.validate(document)?;
        Ok(RuleSet::from_document(document))
    }
}

fn check_parentheses(condition: &str) -> Result<(), ValidationError> {
    let mut depth: usize = 0;
    for c in condition.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ValidationError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(ValidationError::UnbalancedParentheses)
    }
}

fn check_tokens(condition: &str) -> Result<(), ValidationError> {
    for lexeme in lexemes(condition) {
        let token = match lexeme {
            Lexeme::Skipped(c) => c.to_string(),
            Lexeme::Token(token) => match token.kind() {
                TokenKind::Identifier
                | TokenKind::Reserved
                | TokenKind::Number
                | TokenKind::Compare(_)
                | TokenKind::Connective(_)
                | TokenKind::OpenParen
                | TokenKind::CloseParen => continue,
                TokenKind::Terminator | TokenKind::Other => token.as_str().to_owned(),
            },
        };
        return Err(ValidationError::DisallowedToken { token });
    }
    Ok(())
}

/// Strict counterpart of the lenient atom parse: every operand position must hold
/// `<element> <operator> <predicate>` with an allowed operator and predicate.
fn check_atoms(tokens: &[Token<'_>]) -> Result<(), ValidationError> {
    let mut i = 0;
    while i < tokens.len() {
        let subject = tokens[i];
        if !subject.is_word() {
            i += 1;
            continue;
        }
        let (Some(operator), Some(predicate)) = (tokens.get(i + 1), tokens.get(i + 2)) else {
            return Err(ParseError::TruncatedCondition {
                found: tokens[i..].iter().map(ToString::to_string).collect(),
            }
            .into());
        };
        if operator.as_str().parse::<CompareOp>().is_err() {
            return Err(ValidationError::InvalidOperator {
                subject: subject.to_string(),
                operator: operator.to_string(),
            });
        }
        if Predicate::classify(predicate.as_str()).is_none() {
            return Err(ValidationError::InvalidPredicate {
                subject: subject.to_string(),
                predicate: predicate.to_string(),
            });
        }
        i += 3;
    }
    Ok(())
}
