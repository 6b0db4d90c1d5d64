use evalo::evaluate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn addition_matches_native(a in 0i64..=1_000_000_000, b in 0i64..=1_000_000_000) {
        prop_assert_eq!(evaluate(&format!("{a} + {b}")).unwrap(), a + b);
    }

    #[test]
    fn subtraction_matches_native(a in 0i64..=1_000_000_000, b in 0i64..=1_000_000_000) {
        prop_assert_eq!(evaluate(&format!("{a} - {b}")).unwrap(), a - b);
    }

    #[test]
    fn multiplication_matches_native(a in 0i64..=1_000_000, b in 0i64..=1_000_000) {
        prop_assert_eq!(evaluate(&format!("{a} * {b}")).unwrap(), a * b);
    }

    #[test]
    fn division_matches_native(a in 0i64..=1_000_000_000, b in 1i64..=1_000_000_000) {
        prop_assert_eq!(evaluate(&format!("{a} / {b}")).unwrap(), a / b);
    }

    #[test]
    fn division_by_zero_always_fails(a in 0i64..=1_000_000_000) {
        let src = format!("{a} / 0");
        prop_assert!(evaluate(&src).is_err());
    }

    #[test]
    fn any_literal_round_trips(a in 0i64..=i64::MAX) {
        prop_assert_eq!(evaluate(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn whitespace_does_not_change_the_value(a in 0i64..=1_000_000,
                                            b in 0i64..=1_000_000,
                                            pad in " {0,4}") {
        let spaced = format!("{pad}{a}{pad}*{pad}{b}{pad}");
        prop_assert_eq!(evaluate(&spaced).unwrap(), evaluate(&format!("{a}*{b}")).unwrap());
    }

    #[test]
    fn grouping_matches_native(a in 0i64..=100_000,
                               b in 0i64..=100_000,
                               c in 1i64..=100_000) {
        let src = format!("({a} + {b}) * {c} - {a} / {c}");
        prop_assert_eq!(evaluate(&src).unwrap(), (a + b) * c - a / c);
    }
}
