//! Display strings for the picker.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::instant::CandidateInstant;

/// How the hour field is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HourFormat {
    TwelveHour,
    TwentyFourHour,
}

impl HourFormat {
    pub fn from_24_hour_pref(use_24_hour: bool) -> Self {
        if use_24_hour {
            HourFormat::TwentyFourHour
        } else {
            HourFormat::TwelveHour
        }
    }

    pub fn is_24_hour(self) -> bool {
        self == HourFormat::TwentyFourHour
    }
}

/// Locale-ish clock presentation: hour style plus the AM/PM symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFormat {
    pub hour_format: HourFormat,
    pub am_label: String,
    pub pm_label: String,
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self {
            hour_format: HourFormat::TwelveHour,
            am_label: "AM".into(),
            pm_label: "PM".into(),
        }
    }
}

impl ClockFormat {
    pub fn twenty_four_hour() -> Self {
        Self {
            hour_format: HourFormat::TwentyFourHour,
            ..Self::default()
        }
    }

    /// `00`..`23` in 24-hour mode, otherwise `1`..`12` unpadded.
    pub fn display_hour(&self, hour: u32) -> String {
        match self.hour_format {
            HourFormat::TwentyFourHour => format!("{hour:02}"),
            HourFormat::TwelveHour => twelve_hour(hour).to_string(),
        }
    }

    pub fn display_minute(&self, minute: u32) -> String {
        format!("{minute:02}")
    }

    pub fn am_pm_label(&self, hour: u32) -> &str {
        if is_pm(hour) {
            &self.pm_label
        } else {
            &self.am_label
        }
    }

    /// Short absolute time, e.g. `21:45` or `9:45 PM`.
    pub fn format_time(&self, at: &CandidateInstant) -> String {
        let minute = self.display_minute(at.minute());
        match self.hour_format {
            HourFormat::TwentyFourHour => format!("{}:{minute}", self.display_hour(at.hour())),
            HourFormat::TwelveHour => format!(
                "{}:{minute} {}",
                self.display_hour(at.hour()),
                self.am_pm_label(at.hour())
            ),
        }
    }
}

pub fn is_pm(hour: u32) -> bool {
    hour >= 12
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Human-readable distance from `now` to `target`, e.g.
/// `in 2 hours 15 minutes`. Partial minutes are dropped.
pub fn format_duration(now: NaiveDateTime, target: NaiveDateTime) -> String {
    let total_min = (target - now).num_minutes();
    if total_min < 1 {
        return "in less than a minute".to_string();
    }

    let hours = total_min / 60;
    let minutes = total_min % 60;
    match (hours, minutes) {
        (0, m) => format!("in {}", plural(m, "minute")),
        (h, 0) => format!("in {}", plural(h, "hour")),
        (h, m) => format!("in {} {}", plural(h, "hour"), plural(m, "minute")),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Timelike};

    fn at(h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn twenty_four_hour_display_is_zero_padded() {
        let fmt = ClockFormat::twenty_four_hour();
        assert_eq!(fmt.display_hour(0), "00");
        assert_eq!(fmt.display_hour(7), "07");
        assert_eq!(fmt.display_hour(23), "23");
    }

    #[test]
    fn twelve_hour_display_maps_midnight_and_noon_to_twelve() {
        let fmt = ClockFormat::default();
        assert_eq!(fmt.display_hour(0), "12");
        assert!(!is_pm(0));
        assert_eq!(fmt.display_hour(12), "12");
        assert!(is_pm(12));
        assert_eq!(fmt.display_hour(13), "1");
        assert!(is_pm(13));
        assert_eq!(fmt.display_hour(23), "11");
        assert_eq!(fmt.display_hour(9), "9");
    }

    #[test]
    fn minutes_are_always_two_digits() {
        let fmt = ClockFormat::default();
        assert_eq!(fmt.display_minute(0), "00");
        assert_eq!(fmt.display_minute(5), "05");
        assert_eq!(fmt.display_minute(45), "45");
    }

    #[test]
    fn am_pm_label_uses_configured_symbols() {
        let fmt = ClockFormat {
            am_label: "vorm.".into(),
            pm_label: "nachm.".into(),
            ..ClockFormat::default()
        };
        assert_eq!(fmt.am_pm_label(11), "vorm.");
        assert_eq!(fmt.am_pm_label(12), "nachm.");
    }

    #[test]
    fn format_time_follows_hour_format() {
        let c = CandidateInstant::from_naive(at(21, 45));
        assert_eq!(ClockFormat::twenty_four_hour().format_time(&c), "21:45");
        assert_eq!(ClockFormat::default().format_time(&c), "9:45 PM");

        let c = CandidateInstant::from_naive(at(0, 0));
        assert_eq!(ClockFormat::twenty_four_hour().format_time(&c), "00:00");
        assert_eq!(ClockFormat::default().format_time(&c), "12:00 AM");
    }

    #[test]
    fn duration_wording() {
        let now = at(10, 0);
        assert_eq!(format_duration(now, at(12, 15)), "in 2 hours 15 minutes");
        assert_eq!(format_duration(now, at(11, 0)), "in 1 hour");
        assert_eq!(format_duration(now, at(10, 45)), "in 45 minutes");
        assert_eq!(format_duration(now, at(11, 1)), "in 1 hour 1 minute");
        assert_eq!(format_duration(now, now), "in less than a minute");
        assert_eq!(
            format_duration(now, now + Duration::days(1)),
            "in 24 hours"
        );
    }

    #[test]
    fn duration_drops_partial_minutes() {
        let now = at(10, 14).with_second(59).unwrap();
        assert_eq!(format_duration(now, at(12, 30)), "in 2 hours 15 minutes");
    }
}
