use anyhow::Context;
use clap::{Parser, Subcommand};
use log::warn;
use skycast_core::{Config, ForecastController, OpenWeatherClient, ScreenController};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather with a view")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally the endpoint base).
    Configure {
        /// Override the current-conditions endpoint base URL.
        #[arg(long)]
        base: Option<String>,
    },

    /// Show current conditions for a city (the home screen).
    Current {
        /// City name, e.g. "Ho Chi Minh".
        city: String,

        /// Also show the details view, fed through the navigation handoff.
        #[arg(long)]
        details: bool,
    },

    /// Show the short forecast carousel for a city.
    Forecast {
        /// City name.
        city: String,
    },

    /// Show the details screen from a serialized weather payload, as when
    /// navigating to it directly.
    Details {
        /// JSON payload produced by a previous screen's handoff.
        #[arg(long)]
        payload: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { base } => configure(base),
            Command::Current { city, details } => current(city, details).await,
            Command::Forecast { city } => forecast(city).await,
            Command::Details { payload } => {
                render::details_screen(payload.as_deref());
                Ok(())
            }
        }
    }
}

fn configure(base: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    if let Some(base) = base {
        config.set_api_base(base);
    }

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    config.save()?;
    println!(
        "Configuration saved to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn current(city: String, details: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config)?;

    let mut controller = ScreenController::new(city.clone());
    controller.fetch(&client, &city).await;

    if let Some(err) = controller.state().error() {
        warn!("current-conditions fetch failed: {err}");
    }
    render::current_screen(&controller);

    if details {
        // Hand the already-fetched snapshot across the navigation boundary
        // as a serialized copy; no second request is made.
        let payload = controller.nav_payload();
        println!();
        render::details_screen(payload.as_deref());
    }

    Ok(())
}

async fn forecast(city: String) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config)?;

    let mut controller = ForecastController::new(city.clone());
    controller.fetch(&client, &city).await;

    if let Some(err) = controller.state().error() {
        warn!("forecast fetch failed: {err}");
    }
    render::forecast_screen(&mut controller);

    Ok(())
}
