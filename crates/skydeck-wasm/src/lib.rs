//! Browser bridge. Every export returns JSON; `"{}"` means the result could
//! not be serialized or the input was rejected.

use serde::Serialize;
use skydeck_core::models::{DashboardInput, SunTimes, UvReading};
use skydeck_core::uv::UvRisk;
use skydeck_core::{aqi, dashboard, forecast, timeline, uv};
use wasm_bindgen::prelude::*;

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

#[wasm_bindgen]
pub fn classify_aqi(value: f64) -> String {
    json(&aqi::classify(value))
}

/// `risk` may be empty, in which case it is derived from the index.
#[wasm_bindgen]
pub fn classify_uv(index: f64, risk: &str) -> String {
    let risk = if risk.trim().is_empty() {
        None
    } else {
        match UvRisk::from_label(risk) {
            Some(r) => Some(r),
            None => return "{}".to_string(),
        }
    };
    json(&uv::assess_reading(&UvReading { index, risk }))
}

#[wasm_bindgen]
pub fn condition_icon(condition: &str) -> String {
    forecast::icon_for_condition(condition).to_string()
}

/// A NaN `position` means "derive it from the times".
#[wasm_bindgen]
pub fn sun_timeline(sunrise: &str, sunset: &str, now: &str, position: f64) -> String {
    let sun = SunTimes {
        sunrise: sunrise.to_string(),
        sunset: sunset.to_string(),
        current: now.to_string(),
        current_position: (!position.is_nan()).then_some(position),
    };
    json(&timeline::sun_timeline(&sun))
}

/// Build the dashboard from a JSON input; an empty string uses the samples.
#[wasm_bindgen]
pub fn build_dashboard(input_json: &str) -> String {
    let input = if input_json.trim().is_empty() {
        DashboardInput::default()
    } else {
        match DashboardInput::from_json_str(input_json) {
            Ok(input) => input,
            Err(_) => return "{}".to_string(),
        }
    };
    json(&dashboard::build(&input))
}
