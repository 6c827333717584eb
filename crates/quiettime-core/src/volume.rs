//! Restore volume chosen on the picker.

use serde::{Deserialize, Serialize};

/// Ring volume bounded by the platform maximum.
///
/// The ringer is never restored at volume zero, so confirmation is only
/// offered while [`VolumeControl::is_audible`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeControl {
    volume: u32,
    max: u32,
}

impl VolumeControl {
    pub fn new(max: u32, initial: u32) -> Self {
        Self {
            volume: initial.min(max),
            max,
        }
    }

    pub fn get(&self) -> u32 {
        self.volume
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Set the volume, clamping to the maximum. Returns the stored value.
    pub fn set(&mut self, volume: u32) -> u32 {
        self.volume = volume.min(self.max);
        self.volume
    }

    pub fn is_audible(&self) -> bool {
        self.volume != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_volume_is_clamped_to_max() {
        let v = VolumeControl::new(7, 12);
        assert_eq!(v.get(), 7);
        assert_eq!(v.max(), 7);
    }

    #[test]
    fn set_clamps_and_reports_stored_value() {
        let mut v = VolumeControl::new(7, 3);
        assert_eq!(v.set(5), 5);
        assert_eq!(v.set(99), 7);
        assert_eq!(v.get(), 7);
    }

    #[test]
    fn audible_exactly_when_nonzero() {
        let mut v = VolumeControl::new(15, 0);
        assert!(!v.is_audible());
        for volume in 1..=15 {
            v.set(volume);
            assert!(v.is_audible(), "volume {volume}");
        }
        v.set(0);
        assert!(!v.is_audible());
    }

    #[test]
    fn zero_max_is_never_audible() {
        let mut v = VolumeControl::new(0, 4);
        v.set(3);
        assert!(!v.is_audible());
    }
}
