use quiettime_core::Preferences;
use serde_json::json;

use super::state_file;

/// Print the recorded restoration, audio state and remembered volume.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let state = state_file()?.load()?;
    let prefs = Preferences::open()?;
    let out = json!({
        "scheduled": state.scheduled,
        "ringer_mode": state.ringer_mode,
        "stream_volume": state.stream_volume,
        "volume": prefs.config().audio.volume,
        "max_volume": prefs.config().audio.max_volume,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
