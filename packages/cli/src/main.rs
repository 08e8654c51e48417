#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the Airbnb listings dashboard.
//!
//! ```text
//! airbnb_dashboard_cli [--config FILE] [--listings LOC] [--boundaries LOC] render [--events FILE] [--format text|json]
//! airbnb_dashboard_cli interactive
//! airbnb_dashboard_cli countries
//! ```
//!
//! Running with no subcommand enters interactive mode.
//!
//! Uses `indicatif-log-bridge` (via [`airbnb_dashboard_cli_utils::init_logger`])
//! so log lines and the load spinner never fight for the terminal.

mod interactive;

use std::io::IsTerminal as _;
use std::path::PathBuf;

use airbnb_dashboard::{
    Coordinator,
    config::load_config,
    sink::{JsonSink, Sink, TextSink},
};
use airbnb_dashboard_models::{Gesture, view::DashboardSnapshot};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "airbnb_dashboard_cli",
    about = "Cross-filter dashboard over Airbnb listings"
)]
struct Cli {
    /// TOML configuration file (defaults are built in)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Listings CSV path or URL, overriding the configuration
    #[arg(long, global = true)]
    listings: Option<String>,

    /// Boundary `TopoJSON`/`GeoJSON` path or URL, overriding the configuration
    #[arg(long, global = true)]
    boundaries: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a scripted list of gestures and print every chart
    Render {
        /// JSON file holding an array of gestures
        #[arg(long)]
        events: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Explore the dashboard from a menu
    Interactive,
    /// List the countries offered by the country dropdown
    Countries,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Writes `snapshot` to stdout in `format`.
fn print_snapshot(
    snapshot: &DashboardSnapshot,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => JsonSink::new(stdout).write(snapshot)?,
        OutputFormat::Text => {
            let styled = std::io::stdout().is_terminal();
            TextSink::new(stdout, styled).write(snapshot)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = airbnb_dashboard_cli_utils::init_logger();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(listings) = cli.listings {
        config.data.listings = listings;
    }
    if let Some(boundaries) = cli.boundaries {
        config.data.boundaries = boundaries;
    }

    let spinner = airbnb_dashboard_cli_utils::spinner(&multi, "Loading listings and boundaries");
    let data = airbnb_dashboard::load(&config).await;
    spinner.finish_and_clear();
    let data = data?;

    log::info!(
        "Loaded {} listings and {} country boundaries",
        data.store.len(),
        data.boundaries.len()
    );

    let mut coordinator = Coordinator::from_data(data, &config.charts);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Render { events, format } => {
            if let Some(path) = events {
                let gestures: Vec<Gesture> =
                    serde_json::from_str(&std::fs::read_to_string(&path)?)?;
                log::info!("Replaying {} gestures from {}", gestures.len(), path.display());

                for gesture in &gestures {
                    match coordinator.handle(gesture) {
                        Some(event) => log::info!("{gesture:?} -> {event:?}"),
                        None => log::warn!("{gesture:?} was ignored"),
                    }
                }
            }
            print_snapshot(&coordinator.snapshot(), format)?;
        }
        Commands::Interactive => interactive::run(&mut coordinator)?,
        Commands::Countries => {
            for country in coordinator.countries() {
                println!("{country}");
            }
            println!("\n{} countries", coordinator.countries().len());
        }
    }

    Ok(())
}
