mod strategies;

use condrule::parse::{parse_condition, tokenize, Diagnostic, NullSink};
use condrule::{ElementRegistry, RuleSet, ValidationError, Validator};
use proptest::prelude::*;
use strategies::{arb_condition, arb_line, arb_sloppy_condition, KNOWN};

fn names(registry: &ElementRegistry) -> Vec<String> {
    registry.iter().map(str::to_owned).collect()
}

// ---------------------------------------------------------------------------
// Invariant 1: Totality
//
// The lexer and the lenient parser never panic, whatever the input.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn tokenize_is_total(input in ".*") {
        for token in tokenize(&input) {
            prop_assert!(!token.as_str().is_empty());
            prop_assert!(!token.as_str().chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn parse_is_total(input in "[A-Za-z0-9_ ()&|=!<>+;-]{0,64}") {
        let mut elements = ElementRegistry::new();
        let _ = parse_condition(&input, &mut elements, &mut NullSink);
    }

    #[test]
    fn validate_is_total(input in ".{0,80}") {
        let _ = Validator::new(KNOWN.iter().copied()).validate(&input);
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Well-formed lines are accepted
//
// A generated `<action> if <condition>;` over known elements validates, and
// the validator, the compiler and the parsed expression all agree on the
// referenced elements.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn generated_lines_validate((line, cond) in arb_line()) {
        let validator = Validator::new(KNOWN.iter().copied());
        let elements = validator.validate_line(&line);
        prop_assert!(elements.is_ok(), "rejected {line}: {:?}", elements);
        prop_assert_eq!(names(&elements.unwrap()), cond.elements.clone());
    }

    #[test]
    fn compiler_and_validator_agree_on_elements((line, cond) in arb_line()) {
        let validator = Validator::new(KNOWN.iter().copied());
        let from_validator = validator.validate_line(&line).unwrap();
        let ruleset = RuleSet::from_document_with(&line, &mut NullSink);
        prop_assert_eq!(ruleset.len(), 1);
        prop_assert_eq!(names(ruleset.elements()), names(&from_validator));
        let (_, expr) = ruleset.iter().next().unwrap();
        prop_assert_eq!(names(&expr.elements()), cond.elements);
    }

    #[test]
    fn display_reparses_to_same_expression(cond in arb_condition()) {
        let mut elements = ElementRegistry::new();
        let expr = parse_condition(&cond.text, &mut elements, &mut NullSink).unwrap();
        let mut again_elements = ElementRegistry::new();
        let again = parse_condition(&expr.to_string(), &mut again_elements, &mut NullSink).unwrap();
        prop_assert_eq!(expr, again);
        prop_assert_eq!(elements, again_elements);
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Lenient and strict checks agree
//
// The advisory diagnostics of the lenient parse are empty exactly when the
// validator accepts the line, and otherwise the first diagnostic is the
// validator's error.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn lenient_and_strict_agree(condition in arb_sloppy_condition()) {
        let mut elements = ElementRegistry::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        parse_condition(&condition, &mut elements, &mut diagnostics).unwrap();

        let verdict = Validator::new(KNOWN.iter().copied())
            .validate_line(&format!("show if {condition};"));

        match diagnostics.first() {
            None => prop_assert!(verdict.is_ok(), "{condition}: {:?}", verdict),
            Some(first) => prop_assert_eq!(
                verdict.unwrap_err(),
                ValidationError::from(first.clone())
            ),
        }
    }
}
