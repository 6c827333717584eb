use chrono::NaiveDateTime;
use clap::{Args, ValueEnum};
use quiettime_core::{ClockFormat, Event, HourFormat, Preferences, RestoreScreen};

use super::state_file;
use crate::host::{HostAudio, HostTimer};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Step {
    IncHour,
    DecHour,
    IncMinute,
    DecMinute,
    AmPm,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Confirm {
    /// Schedule the restore at the picked time
    Set,
    /// Cancel any scheduled restore
    Never,
    /// Turn the ringer back on immediately
    Now,
}

#[derive(Args)]
pub struct PickArgs {
    /// Initial restore time in epoch milliseconds, used without rounding
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<i64>,
    /// Treat this local time as "now" (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_local_time)]
    pub now: Option<NaiveDateTime>,
    /// Edit to apply, in order; repeatable
    #[arg(long = "step", value_enum)]
    pub steps: Vec<Step>,
    /// Restore volume
    #[arg(long)]
    pub volume: Option<u32>,
    /// Finish with one of the picker's buttons
    #[arg(long, value_enum)]
    pub confirm: Option<Confirm>,
    /// Show hours in 24-hour form regardless of config
    #[arg(long)]
    pub twenty_four_hour: bool,
    /// Print every event as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_local_time(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {e}"))
}

pub fn run(args: PickArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = Preferences::open()?;
    let mut format: ClockFormat = prefs.clock_format();
    if args.twenty_four_hour {
        format.hour_format = HourFormat::TwentyFourHour;
    }
    let max = prefs.config().audio.max_volume;

    let state = state_file()?;
    let timer = HostTimer::new(state.clone(), args.now);
    let audio = HostAudio::new(state, max);
    let mut screen = RestoreScreen::open(timer, audio, prefs, format, args.at)?;

    let mut events = vec![screen.snapshot()];
    for step in &args.steps {
        let event = match step {
            Step::IncHour => screen.increment_hour()?,
            Step::DecHour => screen.decrement_hour()?,
            Step::IncMinute => screen.increment_minute()?,
            Step::DecMinute => screen.decrement_minute()?,
            Step::AmPm => screen.toggle_am_pm()?,
        };
        events.push(event);
    }
    if let Some(volume) = args.volume {
        events.push(screen.set_volume(volume)?);
    }

    // Print what we have even if the confirmation is refused.
    let outcome = match args.confirm {
        Some(Confirm::Set) => screen.confirm_set().map(Some),
        Some(Confirm::Never) => screen.never().map(Some),
        Some(Confirm::Now) => screen.restore_now().map(Some),
        None => Ok(None),
    };
    if let Ok(Some(event)) = &outcome {
        events.push(event.clone());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        for event in &events {
            println!("{}", describe(event));
        }
    }

    outcome?;
    Ok(())
}

fn describe(event: &Event) -> String {
    match event {
        Event::StateSnapshot {
            formatted_time,
            duration,
            volume,
            max_volume,
            can_confirm,
            ..
        } => {
            let note = if *can_confirm { "" } else { " (muted, cannot set)" };
            format!("{formatted_time}  {duration}  volume {volume}/{max_volume}{note}")
        }
        Event::RestoreScheduled { target, volume, .. } => {
            format!("ringer will be restored at {target} with volume {volume}")
        }
        Event::RestoreCancelled { .. } => "ringer restore cancelled".to_string(),
        Event::RingerRestored { volume, .. } => format!("ringer restored at volume {volume}"),
        Event::ScreenClosed { reason, .. } => format!("closed: {reason:?}"),
    }
}
