//! Property tests for the rollover clamp and quarter-hour editing.

use chrono::{DateTime, Duration, NaiveDateTime};
use proptest::prelude::*;
use quiettime_core::{CandidateInstant, Clock, ClockFormat, TimeSelector};

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn naive(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
}

// 1970..2096, with arbitrary seconds in "now".
fn now_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..4_000_000_000).prop_map(naive)
}

// Up to roughly two years either side of now.
fn offset_minutes() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    IncHour,
    DecHour,
    IncMinute,
    DecMinute,
    AmPm,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::IncHour),
        Just(Edit::DecHour),
        Just(Edit::IncMinute),
        Just(Edit::DecMinute),
        Just(Edit::AmPm),
    ]
}

proptest! {
    #[test]
    fn clamp_lands_in_window(now in now_strategy(), offset in offset_minutes()) {
        let tomorrow = now + Duration::days(1);
        let c = CandidateInstant::from_naive(now + Duration::minutes(offset));
        let clamped = c.clamped(now, tomorrow);
        prop_assert!(clamped.naive() >= now);
        prop_assert!(clamped.naive() <= tomorrow);
        // Only whole days are added or removed.
        prop_assert_eq!(clamped.hour(), c.hour());
        prop_assert_eq!(clamped.minute(), c.minute());
    }

    #[test]
    fn clamp_is_idempotent(now in now_strategy(), offset in offset_minutes()) {
        let tomorrow = now + Duration::days(1);
        let once =
            CandidateInstant::from_naive(now + Duration::minutes(offset)).clamped(now, tomorrow);
        prop_assert_eq!(once.clamped(now, tomorrow), once);
    }

    #[test]
    fn initial_rounding_is_on_a_quarter_and_ahead(now in now_strategy()) {
        let c = CandidateInstant::rounded_up_from(now);
        prop_assert!(c.is_on_quarter());
        prop_assert!(c.naive() > now);
        prop_assert!(c.naive() - now <= Duration::minutes(30));
    }

    #[test]
    fn edits_keep_candidate_in_window_and_on_quarters(
        now in now_strategy(),
        edits in prop::collection::vec(edit_strategy(), 0..40),
    ) {
        let clock = FixedClock(now);
        let mut s = TimeSelector::initialize(None, now, ClockFormat::default());
        s.normalize_and_clamp(&clock);
        for edit in edits {
            match edit {
                Edit::IncHour => s.increment_hour(&clock),
                Edit::DecHour => s.decrement_hour(&clock),
                Edit::IncMinute => s.increment_minute(&clock),
                Edit::DecMinute => s.decrement_minute(&clock),
                Edit::AmPm => s.toggle_am_pm(&clock),
            }
            let at = s.candidate().naive();
            prop_assert!(at >= now && at <= clock.tomorrow());
            prop_assert!(s.candidate().is_on_quarter());
        }
    }

    #[test]
    fn increment_then_decrement_minute_never_moves_later(
        now in now_strategy(),
        offset in offset_minutes(),
    ) {
        let start = CandidateInstant::from_naive(now + Duration::minutes(offset));
        let back = start.with_incremented_minute().with_decremented_minute();
        prop_assert!(back.is_on_quarter());
        prop_assert!(back <= start);
    }

    #[test]
    fn display_strings_are_well_formed(now in now_strategy(), twenty_four in any::<bool>()) {
        let format = if twenty_four {
            ClockFormat::twenty_four_hour()
        } else {
            ClockFormat::default()
        };
        let s = TimeSelector::initialize(None, now, format);
        let hour: u32 = s.display_hour().parse().unwrap();
        if twenty_four {
            prop_assert_eq!(s.display_hour().len(), 2);
            prop_assert!(hour <= 23);
        } else {
            prop_assert!((1..=12).contains(&hour));
        }
        prop_assert_eq!(s.display_minute().len(), 2);
    }
}
