use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use batyrbol::Config;

mod cli;

#[derive(Parser)]
#[command(name = "batyrbol")]
#[command(about = "Batyr Bol - a gamified quiz about Kazakh history")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.batyrbol/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one mission
    Play {
        /// Character to play (abylai_khan, abai, aiteke_bi)
        #[arg(long)]
        character: Option<String>,

        /// Difficulty level 1-4 (overrides the config)
        #[arg(long)]
        difficulty: Option<u8>,
    },

    /// Show the player profile
    Profile,

    /// List achievements
    Achievements,

    /// Show the level ladder
    Levels,

    /// Initialize a new ~/.batyrbol/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Delete all progress
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Init runs before config loading, which would auto-create the file.
    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(force);
    }

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Play {
            character,
            difficulty,
        }) => {
            cli::play::play_command(&config, character, difficulty)?;
        }
        Some(Commands::Profile) => {
            cli::profile::profile_command(&config)?;
        }
        Some(Commands::Achievements) => {
            cli::achievements::achievements_command(&config)?;
        }
        Some(Commands::Levels) => {
            cli::profile::levels_command(&config)?;
        }
        Some(Commands::Init { .. }) => unreachable!("handled above"),
        Some(Commands::Reset { yes }) => {
            cli::reset::reset_command(&config, yes)?;
        }
        None => {
            // Default: play a mission
            cli::play::play_command(&config, None, None)?;
        }
    }

    Ok(())
}
