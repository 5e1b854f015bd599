use serde::{Deserialize, Serialize};

use crate::forecast::ConditionIcon;
use crate::uv::UvRisk;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            city: "Banten".into(),
            country: "Indonesia".into(),
        }
    }
}

/// Current conditions for the weather card. Missing fields keep the sample
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub condition: String,
    pub pressure_mb: f64,
    pub visibility_km: f64,
    pub humidity_pct: f64,
    /// Shown as `temperature_c - 2` when missing.
    pub feels_like_c: Option<f64>,
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            temperature_c: 22.0,
            condition: "Partly Cloudy".into(),
            pressure_mb: 800.0,
            visibility_km: 4.3,
            humidity_pct: 87.0,
            feels_like_c: None,
        }
    }
}

/// UV reading plus an optional pre-assigned risk label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvReading {
    pub index: f64,
    #[serde(default)]
    pub risk: Option<UvRisk>,
}

/// Display times for the sun card. Missing fields keep the sample values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub current: String,
    /// Explicit 0–100 position for "now"; derived from the times when absent.
    pub current_position: Option<f64>,
}

impl Default for SunTimes {
    fn default() -> Self {
        Self {
            sunrise: "06:00 am".into(),
            sunset: "06:45 pm".into(),
            current: "03:30 pm".into(),
            current_position: Some(75.0),
        }
    }
}

/// One day of the forecast strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub date: String,
    pub min: f64,
    pub max: f64,
    pub condition: String,
    #[serde(default)]
    pub icon: Option<ConditionIcon>,
}
