//! Behavioural scenarios for outcome chains, driven by `rstest-bdd`.

use outcome::{Outcome, attempt, fail, succeed};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenarios, then, when};

/// State shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct DivisionState {
    numerator: Slot<i32>,
    result: Slot<Outcome<i32>>,
    second_division_ran: Slot<bool>,
}

/// Fresh state for every scenario.
#[fixture]
pub fn division_state() -> DivisionState {
    DivisionState::default()
}

#[expect(clippy::integer_division, reason = "the scenarios exercise integer division")]
fn divide(a: i32, b: i32) -> Outcome<i32> {
    if b == 0 {
        fail("division by zero".to_owned())
    } else {
        succeed(a / b)
    }
}

#[given("the numerator {numerator:i32}")]
fn set_numerator(division_state: &DivisionState, numerator: i32) {
    division_state.numerator.set(numerator);
}

#[when("it is divided by {first:i32} and then by {second:i32}")]
fn divide_twice(division_state: &DivisionState, first: i32, second: i32) {
    let numerator = division_state
        .numerator
        .get()
        .expect("a numerator must be given first");
    let chain = || -> Outcome<i32> {
        let partial = attempt!(divide(numerator, first));
        division_state.second_division_ran.set(true);
        divide(partial, second)
    };
    division_state.second_division_ran.set(false);
    division_state.result.set(chain());
}

#[when("it is divided by {denominator:i32} with a fallback of {fallback:i32}")]
fn divide_with_fallback(division_state: &DivisionState, denominator: i32, fallback: i32) {
    let numerator = division_state
        .numerator
        .get()
        .expect("a numerator must be given first");
    let result = divide(numerator, denominator).or_else(|_| succeed(fallback));
    division_state.result.set(result);
}

#[then("the outcome is a success holding {expected:i32}")]
fn assert_success(division_state: &DivisionState, expected: i32) {
    let result = division_state
        .result
        .get()
        .expect("a division must have run");
    assert_eq!(result, succeed(expected));
}

#[then("the outcome is a failure reading {message}")]
fn assert_failure(division_state: &DivisionState, message: String) {
    let result = division_state
        .result
        .get()
        .expect("a division must have run");
    assert_eq!(result, fail(message.trim_matches('"').to_owned()));
}

#[then("the second division ran")]
fn second_ran(division_state: &DivisionState) {
    assert_eq!(division_state.second_division_ran.get(), Some(true));
}

#[then("the second division never ran")]
fn second_skipped(division_state: &DivisionState) {
    assert_eq!(division_state.second_division_ran.get(), Some(false));
}

scenarios!(
    "tests/features/short_circuit.feature",
    fixtures = [division_state: DivisionState]
);
