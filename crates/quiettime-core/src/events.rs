use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Why the picker closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// A restoration was scheduled.
    Scheduled,
    /// The ringer was restored immediately.
    RestoredNow,
    /// The user chose never to restore automatically.
    Cancelled,
    /// Sound was turned back on outside the picker.
    RingerRestoredExternally,
    /// The host dismissed the picker.
    Dismissed,
}

/// Every state change on the picker produces an Event.
/// Front ends render snapshots; the rest describe what was handed to the
/// platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Display strings after a mutation.
    StateSnapshot {
        target: NaiveDateTime,
        hour: String,
        minute: String,
        am_pm: String,
        is_pm: bool,
        show_am_pm: bool,
        duration: String,
        formatted_time: String,
        volume: u32,
        max_volume: u32,
        can_confirm: bool,
        at: NaiveDateTime,
    },
    RestoreScheduled {
        target: NaiveDateTime,
        volume: u32,
        at: NaiveDateTime,
    },
    RestoreCancelled {
        at: NaiveDateTime,
    },
    RingerRestored {
        volume: u32,
        at: NaiveDateTime,
    },
    ScreenClosed {
        reason: CloseReason,
        at: NaiveDateTime,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn events_serialize_with_type_tag() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let json = serde_json::to_value(Event::ScreenClosed {
            reason: CloseReason::RingerRestoredExternally,
            at,
        })
        .unwrap();
        assert_eq!(json["type"], "ScreenClosed");
        assert_eq!(json["reason"], "ringer_restored_externally");
    }
}
