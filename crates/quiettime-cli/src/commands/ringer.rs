use clap::Args;
use quiettime_core::{RingerMode, RingerWatcher, WatchOutcome};
use serde_json::json;

use super::state_file;

#[derive(Args)]
pub struct RingerArgs {
    /// New ringer mode: "normal", "vibrate", "silent", or a raw platform code
    #[arg(allow_hyphen_values = true)]
    pub mode: String,
}

/// Parse a mode name or a raw integer code. Unknown codes map to `None`.
fn parse_mode(raw: &str) -> Result<Option<RingerMode>, String> {
    if let Ok(code) = raw.trim().parse::<i32>() {
        return Ok(RingerMode::from_code(code));
    }
    raw.parse::<RingerMode>().map(Some)
}

/// Record the mode and ask a short-lived watcher how a picker would react.
/// No picker is open here, so the answer is reported, not acted on.
pub fn run(args: RingerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = parse_mode(&args.mode)?;

    let mut watcher = RingerWatcher::new();
    watcher.attach();
    let outcome = watcher.on_mode_changed(mode);
    watcher.detach();

    state_file()?.update(|s| s.ringer_mode = mode)?;

    let action = match outcome {
        WatchOutcome::Close => "close",
        WatchOutcome::Ignore => "ignore",
    };
    let out = json!({ "mode": mode, "picker": action });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
