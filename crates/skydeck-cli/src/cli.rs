use std::path::PathBuf;

use clap::{Parser, Subcommand};
use skydeck_core::models::QualityLevel;
use skydeck_core::uv::UvRisk;

#[derive(Debug, Parser)]
#[command(name = "skydeck", version, about = "Weather dashboard display values")]
pub struct Cli {
    /// Config file (defaults to $SKYDECK_CONFIG or the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Design-token TOML replacing the built-in catalog.
    #[arg(long, global = true)]
    pub tokens: Option<PathBuf>,

    /// Print single-line JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify an AQI reading.
    Aqi {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Also show the summary gauge for this quality badge.
        #[arg(long)]
        quality: Option<QualityLevel>,
    },
    /// Assess a UV index reading.
    Uv {
        #[arg(allow_negative_numbers = true)]
        index: f64,
        /// Risk label to show; derived from the index when omitted.
        #[arg(long)]
        risk: Option<UvRisk>,
    },
    /// Pick the forecast icon for a condition.
    Condition { text: String },
    /// Lay out the sunrise / now / sunset track.
    Timeline {
        #[arg(long)]
        sunrise: String,
        #[arg(long)]
        sunset: String,
        #[arg(long)]
        now: String,
        /// Explicit 0–100 position for "now".
        #[arg(long, allow_negative_numbers = true)]
        position: Option<f64>,
    },
    /// Build the full dashboard view.
    Dashboard {
        /// Readings file (.toml or .json); falls back to config, then samples.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Look up a design token by dotted path, e.g. `colors.primary.500`.
    Token { path: String },
}
