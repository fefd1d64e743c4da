use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use skycast_core::{Config, Session, WeatherApiProvider};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "Lisbon".
        city: String,
    },

    /// Interactive dashboard: search repeatedly, Esc to quit.
    Watch,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let mut session = build_session()?;
                session.submit(&city).await;
                render::render(&session);
                Ok(())
            }
            Command::Watch => watch().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn watch() -> anyhow::Result<()> {
    let mut session = build_session()?;
    render::render(&session);

    loop {
        let answer = Text::new("Enter city name")
            .with_help_message("Esc to quit")
            .prompt_skippable();

        let city = match answer {
            Ok(Some(city)) => city,
            // Esc or Ctrl-C ends the session. The form itself never dies.
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("failed to read city name"),
        };

        session.submit(&city).await;
        render::render(&session);
    }

    Ok(())
}

fn build_session() -> anyhow::Result<Session> {
    let config = Config::load()?;
    tracing::debug!(path = %Config::config_file_path()?.display(), "loaded configuration");

    let api_key = config.resolve_api_key()?;
    let provider =
        WeatherApiProvider::new(api_key).context("failed to build WeatherAPI.com client")?;

    Ok(Session::new(Box::new(provider)))
}
