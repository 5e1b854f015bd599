//! Air Quality Index classification.
//!
//! Two cards read from this module: the detailed air-quality card, which
//! uses the six-band US EPA table, and the summary card, which shows a coarse
//! five-step gauge next to a caller-supplied quality badge.

use serde::Serialize;

use crate::models::QualityLevel;
use crate::threshold::{Threshold, ThresholdTable};

/// Top of the AQI scale; readings at or above it fill the progress bar.
pub const MAX_AQI: f64 = 500.0;

/// Display metadata for one AQI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiLevel {
    pub label: &'static str,
    /// Background utility class for the progress indicator.
    pub style_token: &'static str,
    /// Text utility class for the label chip.
    pub text_token: &'static str,
}

const AQI_ENTRIES: &[Threshold<AqiLevel>] = &[
    Threshold {
        bound: 50.0,
        value: AqiLevel {
            label: "Good",
            style_token: "bg-green-500",
            text_token: "text-green-700",
        },
    },
    Threshold {
        bound: 100.0,
        value: AqiLevel {
            label: "Moderate",
            style_token: "bg-yellow-400",
            text_token: "text-yellow-700",
        },
    },
    Threshold {
        bound: 150.0,
        value: AqiLevel {
            label: "Unhealthy for Sensitive Groups",
            style_token: "bg-orange-400",
            text_token: "text-orange-700",
        },
    },
    Threshold {
        bound: 200.0,
        value: AqiLevel {
            label: "Unhealthy",
            style_token: "bg-red-500",
            text_token: "text-red-700",
        },
    },
    Threshold {
        bound: 300.0,
        value: AqiLevel {
            label: "Very Unhealthy",
            style_token: "bg-purple-500",
            text_token: "text-purple-700",
        },
    },
    Threshold {
        bound: 500.0,
        value: AqiLevel {
            label: "Hazardous",
            style_token: "bg-rose-900",
            text_token: "text-rose-700",
        },
    },
];

/// EPA bands, ascending. "Hazardous" also catches everything above 500.
pub const AQI_LEVELS: ThresholdTable<'static, AqiLevel> = ThresholdTable::from_static(AQI_ENTRIES);

/// Result of classifying a single AQI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiClassification {
    pub label: &'static str,
    pub style_token: &'static str,
    pub text_token: &'static str,
    /// Progress-bar fill, 0–100.
    pub intensity_percent: u8,
    /// Index into [`AQI_LEVELS`]; grows with the reading.
    pub bucket: usize,
}

/// Classify an AQI reading. Total over all `f64` values.
pub fn classify(aqi: f64) -> AqiClassification {
    let (bucket, level) = AQI_LEVELS.classify(aqi);
    AqiClassification {
        label: level.label,
        style_token: level.style_token,
        text_token: level.text_token,
        intensity_percent: intensity_percent(aqi),
        bucket,
    }
}

/// `round(aqi / 500 * 100)`, clamped to 0–100. NaN reads as 0.
pub fn intensity_percent(aqi: f64) -> u8 {
    if aqi.is_nan() {
        return 0;
    }
    (aqi / MAX_AQI * 100.0).round().clamp(0.0, 100.0) as u8
}

// ── Summary card ────────────────────────────────────────────────────

/// Coarse gauge shown on the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryGauge {
    pub quality: QualityLevel,
    /// Stepped fill: 20, 40, 60, 80 or 100.
    pub progress_percent: u8,
    pub gradient_token: &'static str,
    pub badge_token: &'static str,
}

/// Build the summary gauge. The quality badge is supplied by the caller and
/// is not checked against the reading.
pub fn summary_gauge(aqi: f64, quality: QualityLevel) -> SummaryGauge {
    SummaryGauge {
        quality,
        progress_percent: stepped_progress(aqi),
        gradient_token: gradient_token(aqi),
        badge_token: quality.badge_token(),
    }
}

fn stepped_progress(aqi: f64) -> u8 {
    if aqi.is_nan() || aqi < 100.0 {
        20
    } else if aqi < 200.0 {
        40
    } else if aqi < 300.0 {
        60
    } else if aqi < 400.0 {
        80
    } else {
        100
    }
}

fn gradient_token(aqi: f64) -> &'static str {
    if aqi.is_nan() || aqi < 200.0 {
        "from-green-400 to-yellow-400"
    } else if aqi < 400.0 {
        "from-yellow-400 to-orange-500"
    } else {
        "from-orange-500 to-red-600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_valid() {
        AQI_LEVELS.validate().unwrap();
        assert_eq!(AQI_LEVELS.len(), 6);
    }

    #[test]
    fn test_known_readings() {
        let good = classify(35.0);
        assert_eq!(good.label, "Good");
        assert_eq!(good.intensity_percent, 7);
        assert_eq!(good.style_token, "bg-green-500");

        assert_eq!(classify(75.0).label, "Moderate");
        assert_eq!(classify(100.0).label, "Moderate");
        assert_eq!(classify(101.0).label, "Unhealthy for Sensitive Groups");
        assert_eq!(classify(390.0).label, "Hazardous");
    }

    #[test]
    fn test_non_positive_readings_use_lowest_bucket() {
        for aqi in [0.0, -0.5, -42.0, -1e12, f64::NEG_INFINITY] {
            let c = classify(aqi);
            assert_eq!(c.label, "Good", "aqi = {aqi}");
            assert_eq!(c.bucket, 0);
            assert_eq!(c.intensity_percent, 0);
        }
    }

    #[test]
    fn test_readings_past_the_scale_saturate() {
        for aqi in [500.0, 501.0, 999.0, 1e12, f64::INFINITY] {
            let c = classify(aqi);
            assert_eq!(c.label, "Hazardous", "aqi = {aqi}");
            assert_eq!(c.intensity_percent, 100);
        }
    }

    #[test]
    fn test_nan_is_treated_as_no_reading() {
        let c = classify(f64::NAN);
        assert_eq!(c.bucket, 0);
        assert_eq!(c.intensity_percent, 0);
    }

    #[test]
    fn test_bucket_is_monotonic() {
        let mut prev = 0;
        let mut aqi = -50.0;
        while aqi <= 650.0 {
            let bucket = classify(aqi).bucket;
            assert!(bucket >= prev, "bucket went down at aqi = {aqi}");
            prev = bucket;
            aqi += 0.5;
        }
        assert_eq!(prev, AQI_LEVELS.len() - 1);
    }

    #[test]
    fn test_classify_is_idempotent() {
        for aqi in [-3.0, 35.0, 151.0, 720.0] {
            assert_eq!(classify(aqi), classify(aqi));
        }
    }

    #[test]
    fn test_summary_gauge_steps() {
        assert_eq!(summary_gauge(99.0, QualityLevel::Good).progress_percent, 20);
        assert_eq!(summary_gauge(100.0, QualityLevel::Good).progress_percent, 40);
        assert_eq!(summary_gauge(250.0, QualityLevel::Standard).progress_percent, 60);
        assert_eq!(summary_gauge(390.0, QualityLevel::Standard).progress_percent, 80);
        assert_eq!(summary_gauge(400.0, QualityLevel::Hazardous).progress_percent, 100);
    }

    #[test]
    fn test_summary_gauge_tokens() {
        let gauge = summary_gauge(390.0, QualityLevel::Standard);
        assert_eq!(gauge.gradient_token, "from-yellow-400 to-orange-500");
        assert_eq!(gauge.badge_token, "bg-blue-900");

        let gauge = summary_gauge(450.0, QualityLevel::Hazardous);
        assert_eq!(gauge.gradient_token, "from-orange-500 to-red-600");
        assert_eq!(gauge.badge_token, "bg-red-600");

        let gauge = summary_gauge(f64::NAN, QualityLevel::Good);
        assert_eq!(gauge.progress_percent, 20);
        assert_eq!(gauge.gradient_token, "from-green-400 to-yellow-400");
    }
}
