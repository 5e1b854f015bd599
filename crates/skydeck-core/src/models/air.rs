use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Caller-assigned quality badge on the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QualityLevel {
    Good,
    Standard,
    Hazardous,
}

impl QualityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Standard => "Standard",
            Self::Hazardous => "Hazardous",
        }
    }

    pub fn badge_token(&self) -> &'static str {
        match self {
            Self::Good => "bg-green-500",
            Self::Standard => "bg-blue-900",
            Self::Hazardous => "bg-red-600",
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "standard" => Ok(Self::Standard),
            "hazardous" => Ok(Self::Hazardous),
            _ => Err(CoreError::Input(format!("unknown air quality level: {s}"))),
        }
    }
}

impl<'de> Deserialize<'de> for QualityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Input for the air-quality summary card. Missing fields keep the sample
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirQualitySummary {
    pub aqi: f64,
    /// Main pollutant, e.g. "PM 2.5".
    pub pollutant: String,
    pub wind_direction: String,
    pub quality: QualityLevel,
}

impl Default for AirQualitySummary {
    fn default() -> Self {
        Self {
            aqi: 390.0,
            pollutant: "PM 2.5".into(),
            wind_direction: "West Wind".into(),
            quality: QualityLevel::Standard,
        }
    }
}

/// Individual pollutant concentrations. Any may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pollutants {
    /// PM2.5, µg/m³.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25: Option<f64>,
    /// PM10, µg/m³.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    /// Ozone, ppb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o3: Option<f64>,
    /// Nitrogen dioxide, ppb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no2: Option<f64>,
    /// Sulfur dioxide, ppb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub so2: Option<f64>,
    /// Carbon monoxide, ppm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co: Option<f64>,
}

/// A pollutant reading formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantRow {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl Pollutants {
    /// Present readings in display order: PM2.5, PM10, O₃, NO₂, SO₂, CO.
    pub fn rows(&self) -> Vec<PollutantRow> {
        [
            ("PM2.5", self.pm25, "μg/m³"),
            ("PM10", self.pm10, "μg/m³"),
            ("O₃", self.o3, "ppb"),
            ("NO₂", self.no2, "ppb"),
            ("SO₂", self.so2, "ppb"),
            ("CO", self.co, "ppm"),
        ]
        .into_iter()
        .filter_map(|(label, value, unit)| value.map(|value| PollutantRow { label, value, unit }))
        .collect()
    }
}

/// Input for the detailed air-quality card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirQualityDetail {
    pub aqi: f64,
    pub pollutants: Pollutants,
}

impl Default for AirQualityDetail {
    fn default() -> Self {
        Self {
            aqi: 75.0,
            pollutants: Pollutants {
                pm25: Some(12.5),
                pm10: Some(28.3),
                o3: Some(40.0),
                no2: Some(15.0),
                so2: Some(5.0),
                co: Some(0.8),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_skip_missing_readings() {
        let p = Pollutants {
            pm25: Some(12.5),
            co: Some(0.8),
            ..Default::default()
        };
        let rows = p.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "PM2.5");
        assert_eq!(rows[1].unit, "ppm");
        assert!(Pollutants::default().rows().is_empty());
    }

    #[test]
    fn test_quality_level_parse() {
        assert_eq!("standard".parse::<QualityLevel>().unwrap(), QualityLevel::Standard);
        assert_eq!(" Good ".parse::<QualityLevel>().unwrap(), QualityLevel::Good);
        assert!("fine".parse::<QualityLevel>().is_err());
    }

    #[test]
    fn test_quality_level_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            quality: QualityLevel,
        }
        let w: Wrapper = toml::from_str("quality = \"Hazardous\"").unwrap();
        assert_eq!(w.quality, QualityLevel::Hazardous);
        let w: Wrapper = toml::from_str("quality = \" good \"").unwrap();
        assert_eq!(w.quality, QualityLevel::Good);
        assert!(toml::from_str::<Wrapper>("quality = \"fine\"").is_err());
    }

    #[test]
    fn test_partial_summary_keeps_sample_fields() {
        let summary: AirQualitySummary = toml::from_str("aqi = 42.0").unwrap();
        assert_eq!(summary.aqi, 42.0);
        assert_eq!(summary.pollutant, "PM 2.5");
        assert_eq!(summary.wind_direction, "West Wind");
        assert_eq!(summary.quality, QualityLevel::Standard);
    }
}
