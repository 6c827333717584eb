//! Restore screen: the picker's owning component.
//!
//! Ties a [`TimeSelector`], a [`VolumeControl`] and a [`RingerWatcher`] to
//! the injected platform capabilities. Every editing action returns a fresh
//! [`Event::StateSnapshot`]; the three terminal actions hand the choice to
//! the platform and close the screen.
//!
//! ## Lifecycle
//!
//! ```text
//! open -> (edit | set_volume | save_state/restore_state)* -> close
//! ```
//!
//! `close` happens through `confirm_set`, `restore_now`, `never`, a ringer
//! notification that sound is back, or `dismiss`. Any action after that
//! fails with [`CoreError::ScreenClosed`].

use tracing::{info, warn};

use crate::error::{CoreError, PlatformError, Result};
use crate::events::{CloseReason, Event};
use crate::platform::{AudioFacade, TimerFacade, VolumeStore};
use crate::selector::{ClockFormat, TimeSelector};
use crate::volume::VolumeControl;
use crate::watcher::{RingerMode, RingerWatcher, WatchOutcome};

pub struct RestoreScreen<T, A, S>
where
    T: TimerFacade,
    A: AudioFacade,
    S: VolumeStore,
{
    timer: T,
    audio: A,
    store: S,
    selector: TimeSelector,
    volume: VolumeControl,
    watcher: RingerWatcher,
    closed: Option<CloseReason>,
}

impl<T, A, S> RestoreScreen<T, A, S>
where
    T: TimerFacade,
    A: AudioFacade,
    S: VolumeStore,
{
    /// Open the picker.
    ///
    /// `explicit_epoch_ms` is used verbatim as the initial candidate when
    /// given; otherwise the candidate starts from the timer's "now" rounded
    /// up to a quarter hour. The restore volume starts from the stored
    /// preference, or the stream maximum when nothing was stored.
    pub fn open(
        timer: T,
        audio: A,
        store: S,
        format: ClockFormat,
        explicit_epoch_ms: Option<i64>,
    ) -> Result<Self> {
        let explicit = explicit_epoch_ms
            .map(|ms| {
                timer
                    .instant_from_epoch_millis(ms)
                    .ok_or(CoreError::InvalidInstant(ms))
            })
            .transpose()?;

        let mut selector = TimeSelector::initialize(explicit, timer.now(), format);
        selector.normalize_and_clamp(&timer);

        let max = audio.max_stream_volume()?;
        let initial = store.load_volume()?.unwrap_or(max);
        let volume = VolumeControl::new(max, initial);

        let mut watcher = RingerWatcher::new();
        watcher.attach();

        info!(
            candidate = %selector.candidate().naive(),
            volume = volume.get(),
            max,
            "restore screen opened"
        );

        Ok(Self {
            timer,
            audio,
            store,
            selector,
            volume,
            watcher,
            closed: None,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn selector(&self) -> &TimeSelector {
        &self.selector
    }

    pub fn volume(&self) -> &VolumeControl {
        &self.volume
    }

    pub fn watcher(&self) -> &RingerWatcher {
        &self.watcher
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_some()
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.closed
    }

    /// "Set" and "restore now" are only reachable at an audible volume.
    pub fn can_confirm(&self) -> bool {
        self.volume.is_audible()
    }

    /// Display strings for the current state.
    pub fn snapshot(&self) -> Event {
        let now = self.timer.now();
        Event::StateSnapshot {
            target: self.selector.candidate().naive(),
            hour: self.selector.display_hour(),
            minute: self.selector.display_minute(),
            am_pm: self.selector.am_pm_label().to_string(),
            is_pm: self.selector.is_pm(),
            show_am_pm: self.selector.shows_am_pm(),
            duration: self.selector.formatted_duration(&self.timer, now),
            formatted_time: self.selector.formatted_absolute_time(),
            volume: self.volume.get(),
            max_volume: self.volume.max(),
            can_confirm: self.can_confirm(),
            at: now,
        }
    }

    /// Candidate as epoch milliseconds, for surviving a recreate.
    pub fn save_state(&self) -> Result<i64> {
        let candidate = self.selector.candidate();
        self.timer
            .instant_to_epoch_millis(&candidate)
            .ok_or_else(|| PlatformError::UnrepresentableInstant(candidate.naive()).into())
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Put back a candidate saved by [`Self::save_state`]. Not re-rounded.
    pub fn restore_state(&mut self, epoch_ms: i64) -> Result<Event> {
        self.ensure_open()?;
        let at = self
            .timer
            .instant_from_epoch_millis(epoch_ms)
            .ok_or(CoreError::InvalidInstant(epoch_ms))?;
        self.selector.set_candidate(at);
        self.selector.normalize_and_clamp(&self.timer);
        Ok(self.snapshot())
    }

    pub fn increment_hour(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.selector.increment_hour(&self.timer);
        Ok(self.snapshot())
    }

    pub fn decrement_hour(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.selector.decrement_hour(&self.timer);
        Ok(self.snapshot())
    }

    pub fn increment_minute(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.selector.increment_minute(&self.timer);
        Ok(self.snapshot())
    }

    pub fn decrement_minute(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.selector.decrement_minute(&self.timer);
        Ok(self.snapshot())
    }

    pub fn toggle_am_pm(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.selector.toggle_am_pm(&self.timer);
        Ok(self.snapshot())
    }

    /// Re-apply the clamp against the current time, as on resume.
    pub fn refresh(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.selector.normalize_and_clamp(&self.timer);
        Ok(self.snapshot())
    }

    pub fn set_volume(&mut self, volume: u32) -> Result<Event> {
        self.ensure_open()?;
        self.volume.set(volume);
        Ok(self.snapshot())
    }

    // ── Terminal actions ─────────────────────────────────────────────

    /// Schedule the restoration at the candidate time.
    pub fn confirm_set(&mut self) -> Result<Event> {
        self.ensure_open()?;
        let volume = self.ensure_audible()?;
        self.store.save_volume(volume)?;

        let target = self.selector.candidate();
        self.timer.set(target)?;
        info!(target = %target.naive(), volume, "ringer restore scheduled");

        self.close(CloseReason::Scheduled);
        Ok(Event::RestoreScheduled {
            target: target.naive(),
            volume,
            at: self.timer.now(),
        })
    }

    /// Turn the ringer back on immediately and drop any scheduled restore.
    pub fn restore_now(&mut self) -> Result<Event> {
        self.ensure_open()?;
        let volume = self.ensure_audible()?;
        self.store.save_volume(volume)?;

        self.audio.set_ringer_mode_normal()?;
        self.audio.set_stream_volume(volume)?;
        self.timer.cancel()?;
        info!(volume, "ringer restored now");

        self.close(CloseReason::RestoredNow);
        Ok(Event::RingerRestored {
            volume,
            at: self.timer.now(),
        })
    }

    /// Leave the ringer silenced with nothing scheduled.
    pub fn never(&mut self) -> Result<Event> {
        self.ensure_open()?;
        self.timer.cancel()?;
        info!("ringer restore cancelled");

        self.close(CloseReason::Cancelled);
        Ok(Event::RestoreCancelled {
            at: self.timer.now(),
        })
    }

    /// Feed a ringer mode notification. Returns `ScreenClosed` the first
    /// time sound is reported back on; later notifications are no-ops.
    pub fn on_ringer_mode_changed(&mut self, mode: Option<RingerMode>) -> Option<Event> {
        match self.watcher.on_mode_changed(mode) {
            WatchOutcome::Close if !self.is_closed() => {
                info!(?mode, "ringer turned on outside the picker, closing");
                Some(self.close(CloseReason::RingerRestoredExternally))
            }
            _ => None,
        }
    }

    /// Close without touching the platform. Idempotent.
    pub fn dismiss(&mut self) -> Option<Event> {
        if self.is_closed() {
            return None;
        }
        Some(self.close(CloseReason::Dismissed))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn close(&mut self, reason: CloseReason) -> Event {
        self.watcher.detach();
        self.closed = Some(reason);
        Event::ScreenClosed {
            reason,
            at: self.timer.now(),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(CoreError::ScreenClosed);
        }
        Ok(())
    }

    fn ensure_audible(&self) -> Result<u32> {
        let volume = self.volume.get();
        if !self.volume.is_audible() {
            warn!(volume, "confirmation refused at muted volume");
            return Err(CoreError::ConfirmDisabled { volume });
        }
        Ok(volume)
    }
}
