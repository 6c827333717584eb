//! Time selector: the candidate restore time and its editing rules.
//!
//! Every edit is followed by [`TimeSelector::normalize_and_clamp`], which
//! keeps the candidate inside `[now, tomorrow]` by whole-day shifts. The
//! picker therefore never shows a past time or one more than a day ahead,
//! no matter how many increments were applied.

mod format;
mod instant;

pub use format::{format_duration, is_pm, ClockFormat, HourFormat};
pub use instant::{CandidateInstant, RawFields, MIN_LEAD_REMAINDER, QUARTER_HOUR_MIN};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::platform::{Clock, TimerFacade};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSelector {
    candidate: CandidateInstant,
    format: ClockFormat,
}

impl TimeSelector {
    /// Start from `explicit` verbatim, or from `now` rounded up to a
    /// quarter hour at least ten minutes ahead.
    pub fn initialize(
        explicit: Option<CandidateInstant>,
        now: NaiveDateTime,
        format: ClockFormat,
    ) -> Self {
        let candidate = match explicit {
            Some(at) => at,
            None => CandidateInstant::rounded_up_from(now),
        };
        debug!(
            %now,
            candidate = %candidate.naive(),
            explicit = explicit.is_some(),
            "selector initialized"
        );
        Self { candidate, format }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn candidate(&self) -> CandidateInstant {
        self.candidate
    }

    pub fn display_hour(&self) -> String {
        self.format.display_hour(self.candidate.hour())
    }

    pub fn display_minute(&self) -> String {
        self.format.display_minute(self.candidate.minute())
    }

    pub fn is_pm(&self) -> bool {
        is_pm(self.candidate.hour())
    }

    pub fn am_pm_label(&self) -> &str {
        self.format.am_pm_label(self.candidate.hour())
    }

    /// The AM/PM toggle is hidden in 24-hour mode.
    pub fn shows_am_pm(&self) -> bool {
        !self.format.hour_format.is_24_hour()
    }

    pub fn formatted_absolute_time(&self) -> String {
        self.format.format_time(&self.candidate)
    }

    pub fn formatted_duration<T: TimerFacade + ?Sized>(
        &self,
        timer: &T,
        now: NaiveDateTime,
    ) -> String {
        timer.formatted_duration(now, self.candidate.naive())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the candidate verbatim, as when restoring saved state.
    /// Call [`Self::normalize_and_clamp`] afterwards.
    pub fn set_candidate(&mut self, at: CandidateInstant) {
        self.candidate = at;
    }

    pub fn increment_hour<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.apply(clock, "increment_hour", CandidateInstant::with_incremented_hour);
    }

    pub fn decrement_hour<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.apply(clock, "decrement_hour", CandidateInstant::with_decremented_hour);
    }

    pub fn increment_minute<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.apply(clock, "increment_minute", CandidateInstant::with_incremented_minute);
    }

    pub fn decrement_minute<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.apply(clock, "decrement_minute", CandidateInstant::with_decremented_minute);
    }

    pub fn toggle_am_pm<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.apply(clock, "toggle_am_pm", CandidateInstant::with_toggled_am_pm);
    }

    pub fn normalize_and_clamp<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.candidate = self.candidate.clamped(clock.now(), clock.tomorrow());
    }

    fn apply<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        action: &str,
        edit: fn(CandidateInstant) -> CandidateInstant,
    ) {
        let before = self.candidate;
        self.candidate = edit(self.candidate);
        self.normalize_and_clamp(clock);
        debug!(action, from = %before.naive(), to = %self.candidate.naive(), "candidate edited");
    }
}
