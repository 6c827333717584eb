//! Host-side platform services for the CLI.
//!
//! There is no alarm service or ring stream on a workstation, so the
//! scheduled restoration and the last audio change are recorded in
//! `state.json` inside the data directory. `quiettime status` reads it back.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use quiettime_core::{
    AudioFacade, CandidateInstant, Clock, PlatformError, RingerMode, TimerFacade,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRestore {
    pub at: NaiveDateTime,
    pub epoch_ms: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostState {
    #[serde(default)]
    pub scheduled: Option<ScheduledRestore>,
    #[serde(default)]
    pub ringer_mode: Option<RingerMode>,
    #[serde(default)]
    pub stream_volume: Option<u32>,
}

/// JSON file shared by the host timer and audio services.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<HostState, PlatformError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).map_err(|e| {
                PlatformError::Store(format!("{}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HostState::default()),
            Err(e) => Err(PlatformError::Store(format!("{}: {e}", self.path.display()))),
        }
    }

    pub fn update(&self, edit: impl FnOnce(&mut HostState)) -> Result<(), PlatformError> {
        let mut state = self.load()?;
        edit(&mut state);
        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| PlatformError::Store(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| PlatformError::Store(format!("{}: {e}", self.path.display())))
    }
}

/// Records scheduled restorations in the state file.
pub struct HostTimer {
    state: StateFile,
    now_override: Option<NaiveDateTime>,
}

impl HostTimer {
    pub fn new(state: StateFile, now_override: Option<NaiveDateTime>) -> Self {
        Self {
            state,
            now_override,
        }
    }
}

impl Clock for HostTimer {
    fn now(&self) -> NaiveDateTime {
        self.now_override.unwrap_or_else(|| Local::now().naive_local())
    }
}

impl TimerFacade for HostTimer {
    fn set(&mut self, at: CandidateInstant) -> Result<(), PlatformError> {
        let epoch_ms = self.instant_to_epoch_millis(&at);
        self.state.update(|s| {
            s.scheduled = Some(ScheduledRestore {
                at: at.naive(),
                epoch_ms,
            });
        })?;
        info!(at = %at.naive(), ?epoch_ms, "restore recorded");
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), PlatformError> {
        self.state.update(|s| s.scheduled = None)
    }
}

/// Records ringer and stream volume changes in the state file.
pub struct HostAudio {
    state: StateFile,
    max: u32,
}

impl HostAudio {
    pub fn new(state: StateFile, max: u32) -> Self {
        Self { state, max }
    }
}

impl AudioFacade for HostAudio {
    fn set_ringer_mode_normal(&mut self) -> Result<(), PlatformError> {
        self.state.update(|s| s.ringer_mode = Some(RingerMode::Normal))
    }

    fn set_stream_volume(&mut self, volume: u32) -> Result<(), PlatformError> {
        if volume > self.max {
            return Err(PlatformError::Audio(format!(
                "volume {volume} exceeds stream maximum {}",
                self.max
            )));
        }
        self.state.update(|s| s.stream_volume = Some(volume))
    }

    fn max_stream_volume(&self) -> Result<u32, PlatformError> {
        Ok(self.max)
    }
}
