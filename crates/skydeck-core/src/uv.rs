//! UV index card: marker placement, risk badge and protection advice.
//!
//! The numeric index and the risk label are separate inputs. The index
//! places the marker on the 0–12 scale while the label picks the badge and
//! the advice list. A label is only derived from the index when the caller
//! did not provide one (see [`assess_reading`]).

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::models::UvReading;

/// Index at which the marker reaches the right edge of the scale.
pub const UV_SCALE_MAX: f64 = 12.0;

/// Tick labels drawn under the scale.
pub const SCALE_TICKS: [&str; 5] = ["0", "3", "6", "8", "11+"];

/// Advice lines, ordered so each tier is a prefix of the next.
const ADVICE: [&str; 4] = [
    "Apply SPF 30+ sunscreen",
    "Wear protective clothing",
    "Seek shade during midday hours",
    "Minimize outdoor activities between 10am-4pm",
];

/// UV exposure risk level, ascending.
///
/// Serialized as its display label; deserialized through [`UvRisk::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum UvRisk {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Extreme,
}

impl UvRisk {
    pub const ALL: &[UvRisk] = &[
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
        Self::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }

    /// Case-insensitive parse; accepts "Very High", "very_high" and "VeryHigh".
    pub fn from_label(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "veryhigh" => Some(Self::VeryHigh),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    /// WHO exposure bands: 0–2 Low, 3–5 Moderate, 6–7 High, 8–10 Very High,
    /// 11+ Extreme. NaN and negative readings count as Low.
    pub fn from_index(index: f64) -> Self {
        if index.is_nan() || index < 3.0 {
            Self::Low
        } else if index < 6.0 {
            Self::Moderate
        } else if index < 8.0 {
            Self::High
        } else if index < 11.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    /// Background utility class for the risk badge.
    pub fn badge_token(&self) -> &'static str {
        match self {
            Self::Low => "bg-green-500",
            Self::Moderate => "bg-yellow-500",
            Self::High => "bg-orange-500",
            Self::VeryHigh => "bg-red-500",
            Self::Extreme => "bg-purple-600",
        }
    }

    /// Protection advice. High, Very High and Extreme share the full list.
    pub fn protection_advice(&self) -> &'static [&'static str] {
        match self {
            Self::Low => &ADVICE[..1],
            Self::Moderate => &ADVICE[..3],
            Self::High | Self::VeryHigh | Self::Extreme => &ADVICE,
        }
    }
}

impl std::fmt::Display for UvRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UvRisk {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::Input(format!("unknown UV risk level: {s}")))
    }
}

impl<'de> Deserialize<'de> for UvRisk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Marker offset along the scale, `clamp(index / 12, 0, 1) * 100`.
pub fn marker_position(index: f64) -> f64 {
    if index.is_nan() {
        return 0.0;
    }
    (index / UV_SCALE_MAX).clamp(0.0, 1.0) * 100.0
}

/// Everything the UV card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvAssessment {
    pub index: f64,
    pub risk: UvRisk,
    pub badge_token: &'static str,
    pub marker_percent: f64,
    pub summary: String,
    pub advice: &'static [&'static str],
    pub scale_ticks: [&'static str; 5],
}

/// Assess a reading with an explicit risk label. The label is trusted as-is.
pub fn assess(index: f64, risk: UvRisk) -> UvAssessment {
    UvAssessment {
        index,
        risk,
        badge_token: risk.badge_token(),
        marker_percent: marker_position(index),
        summary: format!("{risk} risk of UV exposure"),
        advice: risk.protection_advice(),
        scale_ticks: SCALE_TICKS,
    }
}

/// Assess a reading, deriving the label from the index only when it is missing.
pub fn assess_reading(reading: &UvReading) -> UvAssessment {
    let risk = reading
        .risk
        .unwrap_or_else(|| UvRisk::from_index(reading.index));
    assess(reading.index, risk)
}
