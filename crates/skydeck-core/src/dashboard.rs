//! Dashboard assembly: runs every mapper over a [`DashboardInput`] and
//! packages the results into one serializable view.

use serde::Serialize;

use crate::aqi::{self, AqiClassification, SummaryGauge};
use crate::forecast::{self, ConditionIcon, ForecastTile};
use crate::models::{DashboardInput, Location, PollutantRow};
use crate::timeline::{self, SunTimeline};
use crate::uv::{self, UvAssessment};

/// Offset applied when no feels-like temperature is supplied.
const DEFAULT_FEELS_LIKE_OFFSET: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub greeting: Greeting,
    pub weather: WeatherCardView,
    pub air_summary: AirSummaryView,
    pub sun: SunTimeline,
    pub uv: UvAssessment,
    pub air_detail: AirDetailView,
    pub forecast: Vec<ForecastTile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Greeting {
    pub username: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherCardView {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub condition: String,
    pub icon: ConditionIcon,
    pub metrics: [MetricTile; 3],
}

/// Small labeled value in the weather card footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub style_token: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirSummaryView {
    pub aqi: f64,
    pub pollutant: String,
    pub wind_direction: String,
    pub gauge: SummaryGauge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirDetailView {
    pub aqi: f64,
    pub classification: AqiClassification,
    pub pollutants: Vec<PollutantRow>,
}

/// Build the full dashboard view. Never fails; bad readings are clamped or
/// fall back the same way the individual mappers do.
pub fn build(input: &DashboardInput) -> DashboardView {
    tracing::debug!(
        user = %input.username,
        city = %input.location.city,
        forecast_days = input.forecast.len(),
        "Building dashboard view"
    );

    let current = &input.current;
    let weather = WeatherCardView {
        temperature_c: current.temperature_c,
        feels_like_c: current
            .feels_like_c
            .unwrap_or(current.temperature_c - DEFAULT_FEELS_LIKE_OFFSET),
        condition: current.condition.clone(),
        icon: forecast::icon_for_condition(&current.condition),
        metrics: [
            MetricTile {
                label: "Pressure",
                value: current.pressure_mb,
                unit: "mb",
                style_token: "bg-blue-900 text-white",
            },
            MetricTile {
                label: "Visibility",
                value: current.visibility_km,
                unit: "km",
                style_token: "bg-lime-300 text-blue-900",
            },
            MetricTile {
                label: "Humidity",
                value: current.humidity_pct,
                unit: "%",
                style_token: "bg-white text-blue-900",
            },
        ],
    };

    let summary = &input.air_summary;
    let air_summary = AirSummaryView {
        aqi: summary.aqi,
        pollutant: summary.pollutant.clone(),
        wind_direction: summary.wind_direction.clone(),
        gauge: aqi::summary_gauge(summary.aqi, summary.quality),
    };

    let detail = &input.air_detail;
    let air_detail = AirDetailView {
        aqi: detail.aqi,
        classification: aqi::classify(detail.aqi),
        pollutants: detail.pollutants.rows(),
    };

    DashboardView {
        greeting: Greeting {
            username: input.username.clone(),
            location: input.location.clone(),
        },
        weather,
        air_summary,
        sun: timeline::sun_timeline(&input.sun),
        uv: uv::assess_reading(&input.uv),
        air_detail,
        forecast: forecast::strip(&input.forecast),
    }
}
