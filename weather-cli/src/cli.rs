use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomUserError, Password, PasswordDisplayMode, Select, Text};
use tracing::{debug, warn};
use weatherwise_core::{
    CityQuery, Config, HourlyChart, TemperatureUnit, WeatherReport, WindMap, cities,
    fetch_five_day, provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherwise", version, about = "Weather Wise: current, hourly and 5-day weather")]
pub struct Cli {
    /// Display unit; defaults to the configured one.
    #[arg(long, global = true, value_parser = parse_unit)]
    pub unit: Option<TemperatureUnit>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and preferred unit.
    Configure,

    /// Current conditions for a city.
    Show {
        /// City name; prompts with suggestions when omitted.
        city: Option<String>,
    },

    /// Temperature for the next 24 hours in 3-hour steps.
    Hourly { city: Option<String> },

    /// One reading per day for the next five days.
    FiveDay { city: Option<String> },

    /// Write `{city}_wind_map.html` showing the wind direction.
    WindMap {
        city: Option<String>,

        /// Directory the page is written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Only write the page; don't open it in a browser.
        #[arg(long)]
        no_open: bool,
    },

    /// List known city names containing a pattern.
    Cities { pattern: Option<String> },
}

fn parse_unit(s: &str) -> Result<TemperatureUnit, String> {
    TemperatureUnit::try_from(s).map_err(|e| e.to_string())
}

fn city_hints(input: &str) -> Result<Vec<String>, CustomUserError> {
    Ok(cities::suggest(input).into_iter().map(str::to_string).collect())
}

fn resolve_city(arg: Option<String>) -> anyhow::Result<CityQuery> {
    let name = match arg {
        Some(name) => name,
        None => Text::new("City:")
            .with_autocomplete(city_hints)
            .prompt()
            .context("No city entered")?,
    };
    Ok(CityQuery::new(name)?)
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        self.run_with(Config::load).await
    }

    /// Dispatch the command; `load_config` is only called by commands that need it.
    async fn run_with<L>(self, load_config: L) -> anyhow::Result<()>
    where
        L: FnOnce() -> anyhow::Result<Config>,
    {
        let unit_override = self.unit;

        match self.command {
            Command::Configure => configure(load_config()?)?,
            Command::Show { city } => {
                let config = load_config()?;
                let unit = display_unit(unit_override, &config);
                let city = resolve_city(city)?;
                let provider = provider_from_config(&config)?;
                let report = WeatherReport::fetch(provider.as_ref(), &city).await?;

                print!("{}", render::snapshot(&report.snapshot, unit));
                println!("Fetched {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
            }
            Command::Hourly { city } => {
                let config = load_config()?;
                let unit = display_unit(unit_override, &config);
                let city = resolve_city(city)?;
                let provider = provider_from_config(&config)?;
                let report = WeatherReport::fetch(provider.as_ref(), &city).await?;

                let chart = HourlyChart::from_series(
                    &report.snapshot.city,
                    &report.snapshot.country,
                    &report.forecast,
                    unit,
                );
                print!("{}", render::chart(&chart));
            }
            Command::FiveDay { city } => {
                let config = load_config()?;
                let unit = display_unit(unit_override, &config);
                let city = resolve_city(city)?;
                let provider = provider_from_config(&config)?;
                let summary = fetch_five_day(provider.as_ref(), &city).await?;

                print!("{}", render::five_day(&summary, unit));
            }
            Command::WindMap { city, out_dir, no_open } => {
                let config = load_config()?;
                let query = resolve_city(city)?;
                let provider = provider_from_config(&config)?;
                let report = WeatherReport::fetch(provider.as_ref(), &query).await?;

                let snap = &report.snapshot;
                let map = WindMap::new(query.as_str(), snap.coordinates, snap.wind_direction);
                let path = map.write_to(&out_dir)?;
                println!("Wind map written to {}", path.display());

                if !no_open {
                    open_in_browser(&path);
                }
            }
            Command::Cities { pattern } => {
                for name in cities::suggest(pattern.as_deref().unwrap_or_default()) {
                    println!("{name}");
                }
            }
        }

        Ok(())
    }
}

fn display_unit(unit_override: Option<TemperatureUnit>, config: &Config) -> TemperatureUnit {
    let unit = unit_override.unwrap_or(config.unit);
    debug!(%unit, "Resolved display unit");
    unit
}

/// Hand the page to the system's default browser. Failure is logged, not fatal.
fn open_in_browser(path: &Path) {
    match open::that(path) {
        Ok(()) => debug!(path = %path.display(), "Opened wind map"),
        Err(e) => warn!(error = %e, path = %path.display(), "Could not open wind map in a browser"),
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("API key prompt cancelled")?;

    let units = vec![TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];
    let start = units.iter().position(|u| *u == config.unit).unwrap_or(0);
    let unit = Select::new("Display unit:", units)
        .with_starting_cursor(start)
        .prompt()
        .context("Unit prompt cancelled")?;

    config.set_api_key(api_key);
    config.unit = unit;
    let path = config.save()?;

    println!("Configuration saved to {}", path.display());
    Ok(())
}
