//! Ringer mode notifications.
//!
//! While the picker is open, a change to any mode other than silent or
//! vibrate means the user restored sound by hand and the picker should
//! close itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingerMode {
    Silent,
    Vibrate,
    Normal,
}

impl RingerMode {
    /// Decode the platform's integer ringer mode. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RingerMode::Silent),
            1 => Some(RingerMode::Vibrate),
            2 => Some(RingerMode::Normal),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            RingerMode::Silent => 0,
            RingerMode::Vibrate => 1,
            RingerMode::Normal => 2,
        }
    }

    pub fn is_quiet(self) -> bool {
        matches!(self, RingerMode::Silent | RingerMode::Vibrate)
    }
}

impl fmt::Display for RingerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RingerMode::Silent => "silent",
            RingerMode::Vibrate => "vibrate",
            RingerMode::Normal => "normal",
        };
        f.write_str(name)
    }
}

impl FromStr for RingerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(RingerMode::Silent),
            "vibrate" => Ok(RingerMode::Vibrate),
            "normal" => Ok(RingerMode::Normal),
            other => Err(format!("unknown ringer mode: {other}")),
        }
    }
}

/// What the picker should do in response to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchOutcome {
    Close,
    Ignore,
}

/// Receives ringer mode changes between `attach` and `detach`.
#[derive(Debug, Clone, Default)]
pub struct RingerWatcher {
    attached: bool,
}

impl RingerWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// `mode` is `None` when the notification carried an unrecognised code;
    /// that counts as sound being back on.
    pub fn on_mode_changed(&self, mode: Option<RingerMode>) -> WatchOutcome {
        if !self.attached {
            return WatchOutcome::Ignore;
        }
        let outcome = match mode {
            Some(m) if m.is_quiet() => WatchOutcome::Ignore,
            _ => WatchOutcome::Close,
        };
        debug!(?mode, ?outcome, "ringer mode changed");
        outcome
    }
}
