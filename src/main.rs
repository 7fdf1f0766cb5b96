use clap::{Parser, Subcommand};
use murmur::error::Result;
use murmur::{paths, IconBuilder, SettingsStore};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "murmur")]
#[command(about = "Settings and icon utilities for murmur", long_about = None)]
struct Cli {
    /// Base directory (defaults to the executable's directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate icon.ico (default)
    Icon,
    /// Load settings, creating defaults if needed, and print them
    Settings,
    /// Print the settings file path
    SettingsPath,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr, stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let base_dir = match cli.dir {
        Some(dir) => dir,
        None => paths::exe_dir()?,
    };
    tracing::debug!("Base directory: {}", base_dir.display());

    match cli.command {
        None | Some(Commands::Icon) => {
            let path = IconBuilder::new(&base_dir).build()?;
            println!("Icon written to {}", path.display());
        }
        Some(Commands::Settings) => {
            let settings = SettingsStore::new(&base_dir).load()?;
            let json = serde_json::to_string_pretty(&settings).map_err(|e| {
                murmur::MurmurError::Other(format!("Failed to serialize settings: {e}"))
            })?;
            println!("{json}");
        }
        Some(Commands::SettingsPath) => {
            println!("{}", SettingsStore::new(&base_dir).path().display());
        }
    }

    Ok(())
}
