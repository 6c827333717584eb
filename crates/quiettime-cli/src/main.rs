use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod host;

#[derive(Parser)]
#[command(name = "quiettime", version, about = "Pick when a silenced ringer comes back on")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the picker, apply edits and optionally confirm
    Pick(commands::pick::PickArgs),
    /// Show the recorded restore and audio state
    Status,
    /// Record a ringer mode change and report how an open picker would react
    ///
    /// No picker stays open between invocations, so nothing is actually
    /// closed. "picker" in the output is what a picker would do on receiving
    /// this mode: "close" or "ignore". Only the recorded mode is changed.
    Ringer(commands::ringer::RingerArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Pick(args) => commands::pick::run(args),
        Commands::Status => commands::status::run(),
        Commands::Ringer(args) => commands::ringer::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
