//! Volume preference backed by the config file.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::Config;
use crate::error::{ConfigError, PlatformError};
use crate::platform::VolumeStore;
use crate::selector::ClockFormat;

/// The config file seen as a [`VolumeStore`]. Every save writes through.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    config: Config,
}

impl Preferences {
    /// Open the config at its default location.
    pub fn open() -> Result<Self, ConfigError> {
        Self::open_at(&Config::path()?)
    }

    pub fn open_at(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            path: path.to_path_buf(),
            config: Config::load_from(path)?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn clock_format(&self) -> ClockFormat {
        self.config.clock_format()
    }
}

impl VolumeStore for Preferences {
    fn load_volume(&self) -> Result<Option<u32>, PlatformError> {
        Ok(Some(self.config.audio.volume))
    }

    fn save_volume(&mut self, volume: u32) -> Result<(), PlatformError> {
        self.config.audio.volume = volume.min(self.config.audio.max_volume);
        self.config.save_to(&self.path)?;
        debug!(volume = self.config.audio.volume, path = %self.path.display(), "volume saved");
        Ok(())
    }
}
