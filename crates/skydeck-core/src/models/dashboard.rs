use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AirQualityDetail, AirQualitySummary, CurrentConditions, ForecastDay, Location, SunTimes,
    UvReading,
};
use crate::error::CoreError;
use crate::uv::UvRisk;

/// Every reading the dashboard shows.
///
/// Missing sections in an input file fall back to the sample values from
/// [`DashboardInput::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInput {
    pub username: String,
    pub location: Location,
    pub current: CurrentConditions,
    pub air_summary: AirQualitySummary,
    pub air_detail: AirQualityDetail,
    pub uv: UvReading,
    pub sun: SunTimes,
    /// Empty means "show the sample week".
    pub forecast: Vec<ForecastDay>,
}

impl DashboardInput {
    /// Read an input file; `.json` is parsed as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        toml::from_str(s).map_err(|e| CoreError::Input(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        serde_json::from_str(s).map_err(|e| CoreError::Input(e.to_string()))
    }
}

impl Default for DashboardInput {
    fn default() -> Self {
        Self {
            username: "Durgendra".into(),
            location: Location::default(),
            current: CurrentConditions::default(),
            air_summary: AirQualitySummary::default(),
            air_detail: AirQualityDetail::default(),
            uv: UvReading {
                index: 20.0,
                risk: Some(UvRisk::Moderate),
            },
            sun: SunTimes::default(),
            forecast: Vec::new(),
        }
    }
}
