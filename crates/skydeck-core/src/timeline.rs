//! Sunrise / now / sunset track.
//!
//! [`map_points`] only packages what it is given: positions are neither
//! validated nor reordered, and each slot gets a fixed marker. Callers that
//! only know wall-clock times can use [`day_progress`] to get the "now"
//! position first.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::SunTimes;

/// Marker drawn for a timeline slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineMarker {
    /// Start-of-day anchor (sun icon).
    Sunrise,
    /// The moving "now" marker.
    Current,
    /// End-of-day anchor (moon icon).
    Sunset,
}

impl TimelineMarker {
    /// Slot order on the track.
    pub const SLOTS: [TimelineMarker; 3] = [Self::Sunrise, Self::Current, Self::Sunset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Current => "Now",
            Self::Sunset => "Sunset",
        }
    }

    pub fn icon_token(&self) -> &'static str {
        match self {
            Self::Sunrise => "text-yellow-500",
            Self::Current => "text-orange-500",
            Self::Sunset => "text-blue-800",
        }
    }

    /// The end anchor is drawn greyed out; the rest use the primary color.
    pub fn dot_token(&self) -> &'static str {
        match self {
            Self::Sunset => "bg-gray-400",
            _ => "bg-primary-500",
        }
    }
}

/// One caller-supplied point on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineAnchor<'a> {
    pub time: &'a str,
    /// Position along the track, 0–100 by convention.
    pub position: f64,
}

/// A labeled marker ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub label: &'static str,
    pub time_value: String,
    pub position_percent: f64,
    pub marker: TimelineMarker,
    pub icon_token: &'static str,
    pub dot_token: &'static str,
}

/// The full sun card: three points plus the filled part of the track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunTimeline {
    pub points: [TimelinePoint; 3],
    pub fill_percent: f64,
}

/// Package three anchors into timeline points, in the order given.
pub fn map_points(
    start: TimelineAnchor<'_>,
    current: TimelineAnchor<'_>,
    end: TimelineAnchor<'_>,
) -> [TimelinePoint; 3] {
    let [m0, m1, m2] = TimelineMarker::SLOTS;
    [point(m0, start), point(m1, current), point(m2, end)]
}

fn point(marker: TimelineMarker, anchor: TimelineAnchor<'_>) -> TimelinePoint {
    TimelinePoint {
        label: marker.label(),
        time_value: anchor.time.to_string(),
        position_percent: anchor.position,
        marker,
        icon_token: marker.icon_token(),
        dot_token: marker.dot_token(),
    }
}

/// Build the sun card from sunrise/sunset/now times.
///
/// Sunrise sits at 0 and sunset at 100. The "now" position comes from
/// `current_position` when present, otherwise from [`day_progress`]; if the
/// times cannot be parsed the marker falls back to 0.
pub fn sun_timeline(sun: &SunTimes) -> SunTimeline {
    let position = match sun.current_position {
        Some(p) => p,
        None => match day_progress(&sun.sunrise, &sun.sunset, &sun.current) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "Could not place current time, using sunrise");
                0.0
            }
        },
    };

    let points = map_points(
        TimelineAnchor {
            time: &sun.sunrise,
            position: 0.0,
        },
        TimelineAnchor {
            time: &sun.current,
            position,
        },
        TimelineAnchor {
            time: &sun.sunset,
            position: 100.0,
        },
    );

    SunTimeline {
        points,
        fill_percent: position,
    }
}

/// Share of daylight elapsed at `now`, as a 0–100 percentage.
///
/// Times before sunrise clamp to 0, times after sunset to 100.
pub fn day_progress(sunrise: &str, sunset: &str, now: &str) -> Result<f64, CoreError> {
    let rise = minutes_of_day(parse_clock(sunrise)?);
    let set = minutes_of_day(parse_clock(sunset)?);
    let now = minutes_of_day(parse_clock(now)?);

    let span = set - rise;
    if span <= 0.0 {
        return Err(CoreError::InvalidTime(format!(
            "sunset {sunset} is not after sunrise {sunrise}"
        )));
    }
    Ok(((now - rise) / span * 100.0).clamp(0.0, 100.0))
}

/// Parse a clock time such as `"03:30 pm"`, `"3:30PM"` or `"15:30"`.
pub fn parse_clock(s: &str) -> Result<NaiveTime, CoreError> {
    let normalized = s.trim().to_ascii_uppercase();
    ["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| CoreError::InvalidTime(format!("unrecognized time: {s:?}")))
}

fn minutes_of_day(t: NaiveTime) -> f64 {
    f64::from(t.num_seconds_from_midnight()) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(time: &str, position: f64) -> TimelineAnchor<'_> {
        TimelineAnchor { time, position }
    }

    #[test]
    fn test_points_pass_through_in_order() {
        let points = map_points(
            anchor("06:00 am", 0.0),
            anchor("03:30 pm", 75.0),
            anchor("06:45 pm", 100.0),
        );
        let positions: Vec<f64> = points.iter().map(|p| p.position_percent).collect();
        assert_eq!(positions, vec![0.0, 75.0, 100.0]);

        let markers: Vec<TimelineMarker> = points.iter().map(|p| p.marker).collect();
        assert_eq!(
            markers,
            vec![
                TimelineMarker::Sunrise,
                TimelineMarker::Current,
                TimelineMarker::Sunset
            ]
        );
        assert_eq!(points[1].label, "Now");
        assert_eq!(points[1].time_value, "03:30 pm");
        assert_eq!(points[2].dot_token, "bg-gray-400");
        assert_eq!(points[0].dot_token, "bg-primary-500");
    }

    #[test]
    fn test_points_are_not_reordered_or_clamped() {
        let points = map_points(anchor("a", 90.0), anchor("b", 130.0), anchor("c", -5.0));
        assert_eq!(points[0].position_percent, 90.0);
        assert_eq!(points[1].position_percent, 130.0);
        assert_eq!(points[2].position_percent, -5.0);
        assert_eq!(points[0].marker, TimelineMarker::Sunrise);
    }

    #[test]
    fn test_day_progress() {
        let p = day_progress("06:00 am", "06:45 pm", "03:30 pm").unwrap();
        assert!((p - 74.5098).abs() < 1e-3, "got {p}");

        assert_eq!(day_progress("06:00", "18:00", "12:00").unwrap(), 50.0);
        assert_eq!(day_progress("06:00", "18:00", "04:00").unwrap(), 0.0);
        assert_eq!(day_progress("06:00", "18:00", "23:59").unwrap(), 100.0);
    }

    #[test]
    fn test_day_progress_errors() {
        assert!(matches!(
            day_progress("noon", "18:00", "12:00"),
            Err(CoreError::InvalidTime(_))
        ));
        assert!(matches!(
            day_progress("18:00", "06:00", "12:00"),
            Err(CoreError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_parse_clock_formats() {
        let expected = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
        assert_eq!(parse_clock("03:30 pm").unwrap(), expected);
        assert_eq!(parse_clock("3:30PM").unwrap(), expected);
        assert_eq!(parse_clock(" 15:30 ").unwrap(), expected);
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn test_sun_timeline_prefers_explicit_position() {
        let sun = SunTimes {
            sunrise: "06:00 am".into(),
            sunset: "06:45 pm".into(),
            current: "03:30 pm".into(),
            current_position: Some(75.0),
        };
        let timeline = sun_timeline(&sun);
        assert_eq!(timeline.fill_percent, 75.0);
        assert_eq!(timeline.points[1].position_percent, 75.0);
        assert_eq!(timeline.points[2].position_percent, 100.0);
    }

    #[test]
    fn test_sun_timeline_derives_or_falls_back() {
        let mut sun = SunTimes {
            sunrise: "06:00".into(),
            sunset: "18:00".into(),
            current: "09:00".into(),
            current_position: None,
        };
        assert_eq!(sun_timeline(&sun).fill_percent, 25.0);

        sun.current = "whenever".into();
        assert_eq!(sun_timeline(&sun).fill_percent, 0.0);
    }
}
