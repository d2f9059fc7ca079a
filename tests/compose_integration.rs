#![cfg(feature = "lambda")]
//! Integration tests for the lambda module.
//!
//! These tests exercise the combinators and composition helpers together
//! in realistic call patterns:
//!
//! - `compose`, `compose3`, `compose4` functions
//! - `compose!` macro
//! - `identity`, `constant` helper functions

use plainfn::compose;
use plainfn::lambda::{compose as compose2, compose3, compose4, constant, identity};
use rstest::rstest;

// =============================================================================
// Documented Examples
// =============================================================================

#[rstest]
fn compose_add_one_after_double() {
    assert_eq!(compose2(|x: i32| x + 1, |x: i32| x * 2)(3), 7);
}

#[rstest]
fn compose3_add_double_subtract() {
    let composed = compose3(|x: i32| x + 1, |x: i32| x * 2, |x: i32| x - 3);
    assert_eq!(composed(10), 15);
}

#[rstest]
fn compose4_of_identities() {
    assert_eq!(compose4(identity, identity, identity, identity)(42), 42);
}

// =============================================================================
// Data Transformation Pipelines
// =============================================================================

#[rstest]
fn parsing_pipeline_passes_errors_through() {
    fn parse_number(text: &str) -> Result<i32, String> {
        text.trim().parse().map_err(|_| format!("not a number: {text}"))
    }

    fn validate_positive(number: Result<i32, String>) -> Result<i32, String> {
        number.and_then(|n| if n > 0 { Ok(n) } else { Err(format!("not positive: {n}")) })
    }

    fn describe(number: Result<i32, String>) -> String {
        number.map_or_else(|error| format!("error: {error}"), |n| format!("ok: {n}"))
    }

    let pipeline = compose3(describe, validate_positive, parse_number);

    assert_eq!(pipeline("  42 "), "ok: 42");
    assert_eq!(pipeline("-1"), "error: not positive: -1");
    assert_eq!(pipeline("abc"), "error: not a number: abc");
}

#[rstest]
fn types_change_across_the_chain() {
    let word_count = |text: &str| text.split_whitespace().count();
    let is_long = |count: usize| count > 3;
    let label = |long: bool| if long { "long" } else { "short" };

    let classify = compose3(label, is_long, word_count);

    assert_eq!(classify("one two"), "short");
    assert_eq!(classify("one two three four five"), "long");
}

#[rstest]
fn closures_capturing_environment() {
    let multiplier = 3;
    let offset = 10;
    let composed = compose2(move |x: i32| x + offset, move |x: i32| x * multiplier);
    assert_eq!(composed(5), 25);
}

// =============================================================================
// Laws
// =============================================================================

#[rstest]
#[case(-5)]
#[case(0)]
#[case(17)]
fn associativity_of_nested_compose(#[case] input: i32) {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;
    let h = |x: i32| x - 3;

    let left = compose2(f, compose2(g, h));
    let right = compose2(compose2(f, g), h);

    assert_eq!(left(input), right(input));
    assert_eq!(left(input), compose3(f, g, h)(input));
    assert_eq!(left(input), compose!(f, g, h)(input));
}

#[rstest]
#[case(-5)]
#[case(0)]
#[case(17)]
fn compose4_is_a_right_fold(#[case] input: i32) {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;
    let h = |x: i32| x - 3;
    let i = |x: i32| x * x;

    let folded = compose2(f, compose2(g, compose2(h, i)));
    assert_eq!(compose4(f, g, h, i)(input), folded(input));
}

// =============================================================================
// Combinators Inside Compositions
// =============================================================================

#[rstest]
fn constant_short_circuits_the_chain() {
    let always_zero = constant::<i32, i32>(0);
    let composed = compose2(always_zero, |x: i32| x * 1000);
    assert_eq!(composed(7), 0);
    assert_eq!(composed(-7), 0);
}

#[rstest]
fn constant_with_iterators() {
    let placeholders: Vec<&str> = ["a", "b", "c"].iter().map(constant("?")).collect();
    assert_eq!(placeholders, vec!["?", "?", "?"]);
}

#[rstest]
fn composed_functions_cross_threads() {
    let composed = compose3(|x: u64| x + 1, |x: u64| x * 2, |x: u64| x - 3);
    let handle = std::thread::spawn(move || composed(10));
    assert_eq!(handle.join().unwrap(), 15);
}
