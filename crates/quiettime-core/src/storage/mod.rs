mod config;
mod preferences;

pub use config::{AudioConfig, Config, DisplayConfig};
pub use preferences::Preferences;

use std::path::PathBuf;

/// Returns `~/.config/quiettime[-dev]/`, creating it if needed.
///
/// Set QUIETTIME_ENV=dev to use the development data directory, or
/// QUIETTIME_DATA_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("QUIETTIME_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("QUIETTIME_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("quiettime-dev")
            } else {
                base_dir.join("quiettime")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
