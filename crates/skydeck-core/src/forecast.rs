//! Forecast strip: condition icons and per-day tiles.

use serde::{Deserialize, Serialize};

use crate::models::ForecastDay;

/// Icon category for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionIcon {
    Sun,
    Cloud,
    Rain,
}

impl ConditionIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Cloud => "cloud",
            Self::Rain => "rain",
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Sun => "text-yellow-500",
            Self::Cloud => "text-gray-400",
            Self::Rain => "text-blue-500",
        }
    }
}

impl std::fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick an icon from free text. Rain beats cloud; anything else is sunny.
pub fn icon_for_condition(condition: &str) -> ConditionIcon {
    let lower = condition.to_lowercase();
    if lower.contains("rain") || lower.contains("drizzle") {
        ConditionIcon::Rain
    } else if lower.contains("cloud") {
        ConditionIcon::Cloud
    } else {
        ConditionIcon::Sun
    }
}

/// One rendered forecast tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastTile {
    pub day: String,
    pub date: String,
    pub condition: String,
    pub icon: ConditionIcon,
    pub icon_token: &'static str,
    pub max_label: String,
    pub min_label: String,
}

/// Build a tile; an icon set on the day overrides the text classifier.
pub fn tile(day: &ForecastDay) -> ForecastTile {
    let icon = day
        .icon
        .unwrap_or_else(|| icon_for_condition(&day.condition));
    ForecastTile {
        day: day.day.clone(),
        date: day.date.clone(),
        condition: day.condition.clone(),
        icon,
        icon_token: icon.color_token(),
        max_label: degrees(day.max),
        min_label: degrees(day.min),
    }
}

/// Build the strip, substituting the sample week when `days` is empty.
pub fn strip(days: &[ForecastDay]) -> Vec<ForecastTile> {
    if days.is_empty() {
        tracing::debug!("No forecast supplied, showing sample week");
        return default_week().iter().map(tile).collect();
    }
    days.iter().map(tile).collect()
}

/// The five-day sample forecast (°F).
pub fn default_week() -> Vec<ForecastDay> {
    [
        ("Mon", "06/20", 68.0, 85.0, "Sunny", ConditionIcon::Sun),
        ("Tue", "06/21", 70.0, 83.0, "Cloudy", ConditionIcon::Cloud),
        ("Wed", "06/22", 65.0, 77.0, "Rainy", ConditionIcon::Rain),
        ("Thu", "06/23", 67.0, 79.0, "Cloudy", ConditionIcon::Cloud),
        ("Fri", "06/24", 70.0, 82.0, "Sunny", ConditionIcon::Sun),
    ]
    .into_iter()
    .map(|(day, date, min, max, condition, icon)| ForecastDay {
        day: day.into(),
        date: date.into(),
        min,
        max,
        condition: condition.into(),
        icon: Some(icon),
    })
    .collect()
}

fn degrees(value: f64) -> String {
    format!("{value}°")
}
