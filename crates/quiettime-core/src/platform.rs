//! Capabilities the platform provides to the picker.
//!
//! The core never reaches for a global timer or audio service. The owning
//! component receives implementations of these traits at construction, so
//! tests can substitute fixed clocks and recording fakes.

use chrono::{Duration, Local, NaiveDateTime};

use crate::error::PlatformError;
use crate::selector::{format_duration, CandidateInstant};

/// Wall-clock source and the local time zone used to interpret instants.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Upper bound of the selectable window.
    fn tomorrow(&self) -> NaiveDateTime {
        self.now() + Duration::days(1)
    }

    fn instant_from_epoch_millis(&self, millis: i64) -> Option<CandidateInstant> {
        CandidateInstant::from_epoch_millis(millis, &Local)
    }

    fn instant_to_epoch_millis(&self, at: &CandidateInstant) -> Option<i64> {
        at.to_epoch_millis(&Local)
    }
}

/// Schedules the eventual ringer restoration.
pub trait TimerFacade: Clock {
    /// Arrange for the ringer to be restored at `at`, replacing any
    /// previously scheduled restoration.
    fn set(&mut self, at: CandidateInstant) -> Result<(), PlatformError>;

    /// Remove any scheduled restoration.
    fn cancel(&mut self) -> Result<(), PlatformError>;

    fn formatted_duration(&self, now: NaiveDateTime, target: NaiveDateTime) -> String {
        format_duration(now, target)
    }
}

/// Ringer mode and ring stream volume.
pub trait AudioFacade {
    fn set_ringer_mode_normal(&mut self) -> Result<(), PlatformError>;

    fn set_stream_volume(&mut self, volume: u32) -> Result<(), PlatformError>;

    fn max_stream_volume(&self) -> Result<u32, PlatformError>;
}

/// Persists the last chosen restore volume across sessions.
pub trait VolumeStore {
    fn load_volume(&self) -> Result<Option<u32>, PlatformError>;

    fn save_volume(&mut self, volume: u32) -> Result<(), PlatformError>;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Fixed(NaiveDateTime);

    impl Clock for Fixed {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    #[test]
    fn tomorrow_defaults_to_one_day_after_now() {
        let now = NaiveDate::from_ymd_opt(2026, 2, 28)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let clock = Fixed(now);
        assert_eq!(
            clock.tomorrow(),
            NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(23, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn system_clock_is_close_to_local_now() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        assert!(now >= before);
        assert!(now - before < Duration::seconds(5));
    }
}
