use chrono::NaiveTime;
use proptest::prelude::*;
use themr::engine::{ThemeVerdict, decide};

/// Generate an arbitrary wall-clock time of day at second precision.
fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..86_400)
        .prop_map(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap())
}

proptest! {
    /// Light exactly on the half-open interval [sunrise, sunset).
    #[test]
    fn light_iff_inside_half_open_interval(
        now in time_strategy(),
        a in time_strategy(),
        b in time_strategy(),
    ) {
        prop_assume!(a < b);
        let expected = if a <= now && now < b {
            ThemeVerdict::Light
        } else {
            ThemeVerdict::Dark
        };
        prop_assert_eq!(decide(now, a, b), expected);
    }

    /// The boundaries behave as specified: sunrise inclusive, sunset exclusive.
    #[test]
    fn boundaries_are_inclusive_exclusive(a in time_strategy(), b in time_strategy()) {
        prop_assume!(a < b);
        prop_assert_eq!(decide(a, a, b), ThemeVerdict::Light);
        prop_assert_eq!(decide(b, a, b), ThemeVerdict::Dark);
    }

    /// An inverted or empty pair never panics and always classifies Dark.
    #[test]
    fn degenerate_pairs_are_dark(
        now in time_strategy(),
        a in time_strategy(),
        b in time_strategy(),
    ) {
        prop_assume!(b <= a);
        prop_assert_eq!(decide(now, a, b), ThemeVerdict::Dark);
    }

    /// The verdict is a pure function of its inputs.
    #[test]
    fn decide_is_deterministic(
        now in time_strategy(),
        a in time_strategy(),
        b in time_strategy(),
    ) {
        prop_assert_eq!(decide(now, a, b), decide(now, a, b));
    }
}
