//! # Quiet Time Core Library
//!
//! This library provides the logic behind the Quiet Time picker: choosing
//! when a silenced ringer should come back on, and at what volume. The
//! platform pieces (scheduling the restore, flipping the ringer mode,
//! persisting preferences) are reached only through injected traits, so the
//! same core drives the CLI and any other front end.
//!
//! ## Architecture
//!
//! - **Time Selector**: candidate instant with quarter-hour rounding and a
//!   rollover clamp into `[now, now + 24h]`, plus 12/24-hour display strings
//! - **Volume Control**: restore volume and the "never restore muted" policy
//! - **Ringer Watcher**: closes the picker when sound is turned back on
//! - **Restore Screen**: owning component wiring the above to the platform
//! - **Storage**: TOML-based configuration and volume preference
//!
//! ## Key Components
//!
//! - [`CandidateInstant`]: Immutable wall-clock value with pure transforms
//! - [`TimeSelector`]: Editing rules and display strings
//! - [`RestoreScreen`]: Picker lifecycle over [`TimerFacade`] and [`AudioFacade`]
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod platform;
pub mod screen;
pub mod selector;
pub mod storage;
pub mod volume;
pub mod watcher;

pub use error::{ConfigError, CoreError, PlatformError};
pub use events::{CloseReason, Event};
pub use platform::{AudioFacade, Clock, SystemClock, TimerFacade, VolumeStore};
pub use screen::RestoreScreen;
pub use selector::{
    format_duration, CandidateInstant, ClockFormat, HourFormat, RawFields, TimeSelector,
};
pub use storage::{Config, Preferences};
pub use volume::VolumeControl;
pub use watcher::{RingerMode, RingerWatcher, WatchOutcome};
