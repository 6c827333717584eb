//! Candidate instant: the wall-clock time being picked.
//!
//! Every edit is expressed as a raw field mutation followed by
//! normalization, so out-of-range fields carry the way a calendar would:
//! minute 60 becomes the next hour, day 0 becomes the last day of the
//! previous month, month 13 becomes January of the next year.
//!
//! All transforms are pure and return a new value.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike,
};
use serde::{Deserialize, Serialize};

/// Granularity of the minute picker.
pub const QUARTER_HOUR_MIN: i64 = 15;

/// When rounding "now" up, a remainder above this many minutes skips one
/// extra quarter so the offered time is never less than ten minutes away.
pub const MIN_LEAD_REMAINDER: i64 = 10;

/// Unnormalized calendar fields. Any field may be negative or overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    pub year: i32,
    /// 1-based month.
    pub month: i64,
    /// 1-based day of month.
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
}

impl RawFields {
    /// Carry overflowing fields into the next larger unit.
    ///
    /// Returns `None` only when the result falls outside chrono's
    /// representable calendar.
    pub fn normalize(self) -> Option<CandidateInstant> {
        let months = i64::from(self.year) * 12 + (self.month - 1);
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;

        let offset = Duration::try_days(self.day - 1)?
            .checked_add(&Duration::try_hours(self.hour)?)?
            .checked_add(&Duration::try_minutes(self.minute)?)?;

        first_of_month
            .checked_add_signed(offset)
            .map(CandidateInstant)
    }
}

/// A normalized wall-clock time with minute precision.
///
/// Ordered chronologically. Seconds and sub-seconds are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateInstant(NaiveDateTime);

impl CandidateInstant {
    /// Wrap a local wall-clock time, dropping seconds.
    pub fn from_naive(at: NaiveDateTime) -> Self {
        let truncated = at
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(at);
        Self(truncated)
    }

    /// Build from epoch milliseconds as seen in `tz`.
    pub fn from_epoch_millis<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<Self> {
        let utc = DateTime::from_timestamp_millis(millis)?;
        Some(Self::from_naive(utc.with_timezone(tz).naive_local()))
    }

    /// Epoch milliseconds of this wall-clock time in `tz`.
    ///
    /// An ambiguous time (clocks turned back) resolves to the earlier
    /// instant. A time skipped by a forward transition resolves to the same
    /// wall time one hour later.
    pub fn to_epoch_millis<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
        match tz.from_local_datetime(&self.0) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.timestamp_millis()),
            LocalResult::None => tz
                .from_local_datetime(&(self.0 + Duration::hours(1)))
                .earliest()
                .map(|dt| dt.timestamp_millis()),
        }
    }

    /// "Now" rounded up to a quarter hour, at least ten minutes ahead
    /// unless the remainder is exactly ten or less.
    pub fn rounded_up_from(now: NaiveDateTime) -> Self {
        Self::from_naive(now).map_fields(|f| {
            let remainder = f.minute % QUARTER_HOUR_MIN;
            f.minute -= remainder;
            f.minute += QUARTER_HOUR_MIN;
            if remainder > MIN_LEAD_REMAINDER {
                f.minute += QUARTER_HOUR_MIN;
            }
        })
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// 0..=23
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// 0..=59
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn fields(&self) -> RawFields {
        RawFields {
            year: self.year(),
            month: i64::from(self.month()),
            day: i64::from(self.day()),
            hour: i64::from(self.hour()),
            minute: i64::from(self.minute()),
        }
    }

    /// True when the minute sits on a quarter-hour boundary.
    pub fn is_on_quarter(&self) -> bool {
        i64::from(self.minute()) % QUARTER_HOUR_MIN == 0
    }

    // ── Transforms ───────────────────────────────────────────────────

    pub fn with_incremented_hour(self) -> Self {
        self.map_fields(|f| f.hour += 1)
    }

    pub fn with_decremented_hour(self) -> Self {
        self.map_fields(|f| f.hour -= 1)
    }

    /// Next quarter strictly after the current minute.
    pub fn with_incremented_minute(self) -> Self {
        self.map_fields(|f| {
            f.minute -= f.minute % QUARTER_HOUR_MIN;
            f.minute += QUARTER_HOUR_MIN;
        })
    }

    /// Previous quarter strictly before the current minute.
    pub fn with_decremented_minute(self) -> Self {
        self.map_fields(|f| {
            let remainder = f.minute % QUARTER_HOUR_MIN;
            if remainder == 0 {
                f.minute -= QUARTER_HOUR_MIN;
            } else {
                f.minute -= remainder;
            }
        })
    }

    /// Adds twelve hours, flipping the AM/PM half of the day.
    pub fn with_toggled_am_pm(self) -> Self {
        self.map_fields(|f| f.hour += 12)
    }

    pub fn with_added_days(self, days: i64) -> Self {
        self.map_fields(|f| f.day += days)
    }

    /// Shift by whole days into the inclusive window `[now, tomorrow]`.
    ///
    /// Equivalent to stepping one day forward while before `now`, then one
    /// day back while after `tomorrow`, without the loop.
    pub fn clamped(self, now: NaiveDateTime, tomorrow: NaiveDateTime) -> Self {
        let mut at = self;

        if at.0 < now {
            let mut days = (now - at.0).num_days();
            if at.with_added_days(days).0 < now {
                days += 1;
            }
            at = at.with_added_days(days);
        }

        if at.0 > tomorrow {
            let mut days = (at.0 - tomorrow).num_days();
            if at.with_added_days(-days).0 > tomorrow {
                days += 1;
            }
            at = at.with_added_days(-days);
        }

        at
    }

    /// Apply a raw field edit and normalize. Saturates at the calendar
    /// limits by leaving the value unchanged.
    fn map_fields(self, edit: impl FnOnce(&mut RawFields)) -> Self {
        let mut fields = self.fields();
        edit(&mut fields);
        fields.normalize().unwrap_or(self)
    }
}
