//! Property-based tests for the scanner, parser, and evaluator
//!
//! These use proptest to generate random inputs and verify that:
//! 1. The scanner and parser never panic on arbitrary input
//! 2. Printing a value and re-parsing it reproduces the structure
//! 3. Environment definitions round-trip through lookup

use minischeme::lexer::SExprScanner;
use minischeme::parser::SExprParser;
use minischeme::runtime::{Environment, Evaluator, Value};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Token soup that looks like S-expression fragments
fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_token(), 0..40).prop_map(|tokens| tokens.join(" "))
}

fn sexp_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("'".to_string()),
        Just("`".to_string()),
        Just(",".to_string()),
        Just(".".to_string()),
        // Reserved heads
        Just("define".to_string()),
        Just("if".to_string()),
        Just("lambda".to_string()),
        Just("let".to_string()),
        Just("cond".to_string()),
        Just("quote".to_string()),
        // Literals
        Just("#t".to_string()),
        Just("#f".to_string()),
        (-1000i64..1000i64).prop_map(|n| n.to_string()),
        (0.0f64..100.0f64).prop_map(|f| format!("{:.2}", f)),
        r#""[a-zA-Z0-9 ]{0,12}""#.prop_map(|s| s),
        // Identifiers, including operator names. `exit` is excluded:
        // a generated `(exit)` would terminate the test process.
        "[a-z][a-z0-9?-]{0,8}"
            .prop_filter("exit terminates the process", |s| s != "exit"),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("<=".to_string()),
        // Comments
        ";[^\n]{0,16}".prop_map(|s| s),
    ]
}

/// Values whose printed form re-parses exactly: integral numbers,
/// booleans, plain strings and symbols, nil, and lists built from them
fn printable_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(n as f64)),
        "[a-zA-Z ]{0,10}".prop_map(|s| Value::string(&s)),
        "[a-z][a-z0-9?-]{0,8}".prop_map(|s| Value::symbol(&s)),
        Just(Value::Nil),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
            (inner.clone(), inner).prop_map(|(car, cdr)| Value::cons(car, cdr)),
        ]
    })
}

// =============================================================================
// NEVER-PANIC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn scanner_never_panics(source in arbitrary_source_string()) {
        // Errors are fine; panics are not.
        let _ = SExprScanner::new(&source).scan_tokens();
    }

    #[test]
    fn parser_never_panics(source in sexp_like_string()) {
        if let Ok(tokens) = SExprScanner::new(&source).scan_tokens() {
            let _ = SExprParser::new(tokens).parse_all();
        }
    }

    #[test]
    fn evaluator_never_panics_on_token_soup(source in sexp_like_string()) {
        let _ = Evaluator::new().eval_source(&source);
    }
}

// =============================================================================
// ROUND-TRIP AND ENVIRONMENT PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn print_then_reparse_reproduces_structure(value in printable_value()) {
        let printed = value.to_string();
        let tokens = SExprScanner::new(&printed).scan_tokens().unwrap();
        let reparsed = SExprParser::new(tokens).parse().unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn define_then_lookup_round_trips(
        name in "[a-z][a-z0-9]{0,8}",
        value in printable_value(),
    ) {
        let env = Environment::global();
        env.borrow_mut().define(name.clone(), value.clone());
        prop_assert_eq!(env.borrow().lookup(&name).unwrap(), value);
    }

    #[test]
    fn length_of_any_proper_list(items in prop::collection::vec(
        (-100i64..100i64).prop_map(|n| Value::Number(n as f64)), 0..20))
    {
        let len = items.len();
        let interp = Evaluator::new();
        interp.env().borrow_mut().define("xs", Value::list(items));
        let result = interp.eval_source("(length xs)").unwrap();
        prop_assert_eq!(result, Value::Number(len as f64));
    }

    #[test]
    fn arithmetic_matches_host(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let interp = Evaluator::new();
        let sum = interp.eval_source(&format!("(+ {} {})", a, b)).unwrap();
        prop_assert_eq!(sum, Value::Number((a + b) as f64));

        let product = interp.eval_source(&format!("(* {} {})", a, b)).unwrap();
        prop_assert_eq!(product, Value::Number((a * b) as f64));
    }
}
