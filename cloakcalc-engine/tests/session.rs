// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cloakcalc_engine::{
    arithmetic::{format_number, ERROR_DISPLAY},
    matcher::{Outcome, PatternMatcher, ResultPattern},
    navigation::{Navigator, RecordingNavigator, Route},
    token::{parse_tokens, Digit, Operator, Token},
    RenderView, Session,
};
use proptest::prelude::*;
use test_log::test;

fn press_all(session: &mut Session, keys: &str, navigator: &mut RecordingNavigator) -> Vec<Outcome> {
    parse_tokens(keys)
        .unwrap()
        .into_iter()
        .map(|token| session.press(token, navigator))
        .collect()
}

fn run(keys: &str) -> (Session, RecordingNavigator) {
    let mut session = Session::default();
    let mut navigator = RecordingNavigator::default();
    press_all(&mut session, keys, &mut navigator);
    (session, navigator)
}

#[test]
fn test_plain_addition() {
    let (session, navigator) = run("1+2=");
    assert_eq!(session.display(), "3");
    assert!(navigator.routes.is_empty());
}

#[test]
fn test_navigation_pattern() {
    let mut session = Session::default();
    let mut navigator = RecordingNavigator::default();
    let outcomes = press_all(&mut session, "777+777=", &mut navigator);

    assert_eq!(outcomes.last(), Some(&Outcome::Navigate));
    assert_eq!(
        outcomes.iter().filter(|o| **o == Outcome::Navigate).count(),
        1
    );
    assert_eq!(navigator.routes, vec![Route::Emergency]);
}

#[test]
fn test_navigation_after_noise() {
    let (_, navigator) = run("12×4=9-3.5+777+777=");
    assert_eq!(navigator.routes, vec![Route::Emergency]);
}

#[test]
fn test_navigation_leaves_arithmetic_alone() {
    let (session, _) = run("777+777");
    let before = session.state().clone();

    let mut session = session;
    let mut navigator = RecordingNavigator::default();
    assert_eq!(session.press(Token::Equals, &mut navigator), Outcome::Navigate);
    assert_eq!(session.state(), &before);
    assert_eq!(session.log().len(), 8);
}

#[test]
fn test_substitutions() {
    assert_eq!(run("123+456=").0.display(), "579");
    assert_eq!(run("555-333=").0.display(), "222");
    assert_eq!(run("911×2=").0.display(), "1822");
    // the fabricated value wins over the real result
    assert_eq!(run("3+911×2=").0.display(), "1822");
}

#[test]
fn test_substitution_chains_from_fabricated_value() {
    assert_eq!(run("3+911×2=+1=").0.display(), "1823");
}

#[test]
fn test_divide_zero_by_zero() {
    let (session, navigator) = run("0÷0=");
    assert_eq!(session.display(), ERROR_DISPLAY);
    assert!(navigator.routes.is_empty());

    let (session, _) = run("0÷0=8");
    assert_eq!(session.display(), "8");
}

#[test]
fn test_results_are_rounded_for_display() {
    assert_eq!(run("98765.4321×3=").0.display(), "296296.2963");
    assert_eq!(run("1234567.3+0.1=").0.display(), "1234567.4");
    assert_eq!(run("0.1+0.2=").0.display(), "0.3");
}

#[test]
fn test_full_clear_forgets_prior_keys() {
    let mut session = Session::default();
    let mut navigator = RecordingNavigator::default();
    press_all(&mut session, "777+77", &mut navigator);

    session.clear();
    assert_eq!(session.display(), "0");
    assert!(session.log().is_empty());
    assert_eq!(session.state().pending_operand(), None);

    press_all(&mut session, "7=", &mut navigator);
    assert!(navigator.routes.is_empty());
    assert_eq!(session.display(), "7");
}

#[test]
fn test_clear_entry_keeps_pending_operation() {
    let mut session = Session::default();
    let mut navigator = RecordingNavigator::default();
    press_all(&mut session, "5+3", &mut navigator);

    session.clear_entry();
    assert_eq!(session.display(), "0");
    assert!(session.log().is_empty());
    assert_eq!(session.state().pending_operand(), Some(5.0));
    assert_eq!(session.state().pending_operator(), Some(Operator::Add));

    press_all(&mut session, "4=", &mut navigator);
    assert_eq!(session.display(), "9");
}

#[test]
fn test_clear_entry_breaks_a_pattern_in_progress() {
    let mut session = Session::default();
    let mut navigator = RecordingNavigator::default();
    press_all(&mut session, "777+77", &mut navigator);
    session.clear_entry();
    press_all(&mut session, "7=", &mut navigator);
    assert!(navigator.routes.is_empty());
}

#[test]
fn test_step_is_pure() {
    let session = Session::default();
    let (next, outcome) = session.clone().step(Token::Digit(Digit::ALL[4]));

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(session.display(), "0");
    assert!(session.log().is_empty());
    assert_eq!(next.display(), "4");
    assert_eq!(next.log().len(), 1);
}

#[test]
fn test_render() {
    let (session, _) = run("12×3");
    assert_eq!(
        session.render(),
        RenderView {
            display: "3".to_string(),
            sequence: "1 2 × 3".to_string(),
        }
    );
}

#[test]
fn test_custom_matcher() {
    let matcher = PatternMatcher::new(
        parse_tokens("1÷1=").unwrap(),
        vec![ResultPattern::new("2×2=", "5").unwrap()],
    )
    .unwrap();
    let mut session = Session::new(matcher);
    let mut navigator = RecordingNavigator::default();

    press_all(&mut session, "2×2=", &mut navigator);
    assert_eq!(session.display(), "5");

    press_all(&mut session, "1÷1=", &mut navigator);
    assert_eq!(navigator.routes, vec![Route::Emergency]);

    // the default tables are not in effect
    session.clear();
    press_all(&mut session, "777+777=", &mut navigator);
    assert_eq!(session.display(), "1554");
    assert_eq!(navigator.routes.len(), 1);
}

struct CountingNavigator(usize);

impl Navigator for CountingNavigator {
    fn navigate_to(&mut self, route: Route) {
        assert_eq!(route, Route::Emergency);
        self.0 += 1;
    }
}

#[test]
fn test_navigator_trait_object() {
    let mut session = Session::default();
    let mut counter = CountingNavigator(0);
    let navigator: &mut dyn Navigator = &mut counter;

    for token in parse_tokens("777+777=777+777=").unwrap() {
        session.press(token, navigator);
    }

    assert_eq!(counter.0, 2);
}

// ---------- Property Tests ----------

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Divisors are never zero, so the chain always stays finite.
fn step_strategy() -> impl Strategy<Value = (Operator, u32)> {
    operator_strategy().prop_flat_map(|op| {
        let operands = if op == Operator::Divide { 1u32..100 } else { 0u32..100 };
        (Just(op), operands)
    })
}

proptest! {
    /// Operands stay below 100, so none of the three-digit hidden sequences can appear and
    /// the display must be the plain left-to-right result, divisions included.
    #[test]
    fn chained_evaluation_matches_left_to_right_fold(
        first in 0u32..100,
        rest in prop::collection::vec(step_strategy(), 1..5),
    ) {
        let mut keys = first.to_string();
        let mut expected = f64::from(first);

        for (op, operand) in &rest {
            keys.push(op.symbol());
            keys.push_str(&operand.to_string());
            let operand = f64::from(*operand);
            expected = match op {
                Operator::Add => expected + operand,
                Operator::Subtract => expected - operand,
                Operator::Multiply => expected * operand,
                Operator::Divide => expected / operand,
            };
        }
        keys.push('=');

        let (session, navigator) = run(&keys);
        prop_assert!(navigator.routes.is_empty());
        prop_assert_eq!(session.display(), format_number(expected));
    }

    #[test]
    fn log_grows_by_one_per_key(keys in "[0-9.+*/=-]{0,40}") {
        let mut session = Session::default();
        let mut navigator = RecordingNavigator::default();

        for (i, token) in parse_tokens(&keys).unwrap().into_iter().enumerate() {
            session.press(token, &mut navigator);
            prop_assert_eq!(session.log().len(), i + 1);
        }
    }

    #[test]
    fn navigation_fires_after_any_prefix(prefix in "[0-9.+*/=-]{0,20}") {
        let keys = format!("{prefix}777+777=");
        let mut session = Session::default();
        let mut navigator = RecordingNavigator::default();
        let outcomes = press_all(&mut session, &keys, &mut navigator);

        prop_assert_eq!(outcomes.last(), Some(&Outcome::Navigate));
        prop_assert!(!navigator.routes.is_empty());
    }
}
