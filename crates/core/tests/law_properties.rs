//! Property-based tests for the composition laws.
//!
//! Uses proptest to validate, for arbitrary inputs and both variants:
//! - Left and right identity of `bind`
//! - Associativity of `bind`
//! - Failure absorption (the step is never invoked)
//! - Identity and composition of `map`
//! - `combine` agrees with a sequence of `bind`s

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::arithmetic_side_effects)]

use std::cell::Cell;

use outcome_core::{Combine, Failure, Outcome, Success, combine};
use proptest::prelude::*;

type Probe = Outcome<i64, String>;

fn halve(x: i64) -> Probe {
    if x % 2 == 0 {
        Success(x / 2)
    } else {
        Failure(format!("{x} is odd"))
    }
}

fn below_limit(x: i64) -> Probe {
    if x.unsigned_abs() < 1_000_000 {
        Success(x.wrapping_mul(3))
    } else {
        Failure(format!("{x} out of range"))
    }
}

fn outcome_strategy() -> impl Strategy<Value = Probe> {
    prop_oneof![
        any::<i64>().prop_map(Success),
        "[a-z]{0,12}".prop_map(Failure),
    ]
}

proptest! {
    /// Property: Success(x).bind(f) == f(x)
    #[test]
    fn prop_left_identity(x in any::<i64>()) {
        prop_assert_eq!(Success(x).bind(halve), halve(x));
        prop_assert_eq!(Success(x).bind(below_limit), below_limit(x));
    }

    /// Property: r.bind(Success) == r
    #[test]
    fn prop_right_identity(r in outcome_strategy()) {
        prop_assert_eq!(r.clone().bind(Success), r);
    }

    /// Property: (r.bind(f)).bind(g) == r.bind(|x| f(x).bind(g))
    #[test]
    fn prop_associativity(r in outcome_strategy()) {
        let left = r.clone().bind(halve).bind(below_limit);
        let right = r.bind(|x| halve(x).bind(below_limit));
        prop_assert_eq!(left, right);
    }

    /// Property: Failure(e).bind(f) == Failure(e), f never invoked
    #[test]
    fn prop_failure_absorption(e in "[a-z ]{0,24}") {
        let calls = Cell::new(0_u32);
        let absorbed = Failure::<i64, String>(e.clone()).bind(|x| {
            calls.set(calls.get() + 1);
            halve(x)
        });
        prop_assert_eq!(absorbed, Failure(e));
        prop_assert_eq!(calls.get(), 0);
    }

    /// Property: map(r, id) == r
    #[test]
    fn prop_map_identity(r in outcome_strategy()) {
        prop_assert_eq!(r.clone().map(|x| x), r);
    }

    /// Property: r.map(f).map(g) == r.map(|x| g(f(x)))
    #[test]
    fn prop_map_composition(r in outcome_strategy()) {
        let f = |x: i64| x.wrapping_add(7);
        let g = |x: i64| x.wrapping_mul(-2);
        prop_assert_eq!(r.clone().map(f).map(g), r.map(|x| g(f(x))));
    }

    /// Property: map is bind followed by Success
    #[test]
    fn prop_map_is_bind_then_success(r in outcome_strategy()) {
        let f = |x: i64| x.wrapping_sub(1);
        prop_assert_eq!(r.clone().map(f), r.bind(|x| Success(f(x))));
    }

    /// Property: combine returns the first failure in declared order, else the sum
    #[test]
    fn prop_combine_matches_bind_sequence(
        a in outcome_strategy(),
        b in outcome_strategy(),
        c in outcome_strategy(),
    ) {
        let sum = |x: i64, y: i64, z: i64| x.wrapping_add(y).wrapping_add(z);
        let sequenced = a.clone().bind(|x| b.clone().bind(|y| c.clone().map(|z| sum(x, y, z))));

        let via_tuple = (a.clone(), b.clone(), c.clone()).combine(|(x, y, z)| sum(x, y, z));
        let via_macro = combine!(x = a, y = b, z = c => sum(x, y, z));

        prop_assert_eq!(&via_tuple, &sequenced);
        prop_assert_eq!(via_macro, sequenced);
    }

    /// Property: collecting stops at the first failure and reports it
    #[test]
    fn prop_collect_reports_first_failure(items in prop::collection::vec(outcome_strategy(), 0..16)) {
        let expected = items
            .iter()
            .find_map(|item| item.error().cloned())
            .map_or_else(
                || Success(items.iter().filter_map(|item| item.answer().copied()).collect::<Vec<_>>()),
                Failure,
            );
        let collected: Outcome<Vec<i64>, String> = items.into_iter().collect();
        prop_assert_eq!(collected, expected);
    }
}
