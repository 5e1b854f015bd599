use std::path::Path;

use serde::Serialize;
use skydeck_core::config::AppConfig;
use skydeck_core::models::{DashboardInput, SunTimes, UvReading};
use skydeck_core::{aqi, dashboard, forecast, timeline, uv};

use crate::cli::Command;
use crate::error::CliError;

/// Run one subcommand and return what should be printed.
pub fn run(command: &Command, config: &AppConfig, compact: bool) -> Result<String, CliError> {
    match command {
        Command::Aqi { value, quality } => {
            #[derive(Serialize)]
            struct AqiOutput {
                classification: aqi::AqiClassification,
                #[serde(skip_serializing_if = "Option::is_none")]
                summary: Option<aqi::SummaryGauge>,
            }
            let output = AqiOutput {
                classification: aqi::classify(*value),
                summary: quality.map(|q| aqi::summary_gauge(*value, q)),
            };
            to_json(&output, compact)
        }
        Command::Uv { index, risk } => {
            let reading = UvReading {
                index: *index,
                risk: *risk,
            };
            to_json(&uv::assess_reading(&reading), compact)
        }
        Command::Condition { text } => Ok(forecast::icon_for_condition(text).to_string()),
        Command::Timeline {
            sunrise,
            sunset,
            now,
            position,
        } => {
            let sun = SunTimes {
                sunrise: sunrise.clone(),
                sunset: sunset.clone(),
                current: now.clone(),
                current_position: *position,
            };
            to_json(&timeline::sun_timeline(&sun), compact)
        }
        Command::Dashboard { input } => {
            let input = match input.as_ref().or(config.dashboard.input.as_ref()) {
                Some(path) => {
                    tracing::info!(path = %path.display(), "Reading dashboard input");
                    DashboardInput::from_path(path)?
                }
                None => DashboardInput::default(),
            };
            to_json(&dashboard::build(&input), compact)
        }
        Command::Token { path } => Ok(skydeck_tokens::global().lookup(path)?),
    }
}

/// Replacement token catalog to install before running `command`.
///
/// Only `token` reads the catalog, so other subcommands never touch the file.
pub fn token_file<'a>(
    command: &Command,
    flag: Option<&'a Path>,
    config: &'a AppConfig,
) -> Option<&'a Path> {
    match command {
        Command::Token { .. } => flag.or(config.tokens.path.as_deref()),
        _ => None,
    }
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use skydeck_core::models::QualityLevel;
    use skydeck_core::uv::UvRisk;

    fn run_json(command: Command) -> serde_json::Value {
        let out = run(&command, &AppConfig::default(), true).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_aqi_command() {
        let json = run_json(Command::Aqi {
            value: 35.0,
            quality: None,
        });
        assert_eq!(json["classification"]["label"], "Good");
        assert_eq!(json["classification"]["intensity_percent"], 7);
        assert!(json.get("summary").is_none());

        let json = run_json(Command::Aqi {
            value: 390.0,
            quality: Some(QualityLevel::Standard),
        });
        assert_eq!(json["summary"]["progress_percent"], 80);
    }

    #[test]
    fn test_uv_command_keeps_supplied_risk() {
        let json = run_json(Command::Uv {
            index: 20.0,
            risk: Some(UvRisk::Moderate),
        });
        assert_eq!(json["risk"], "Moderate");
        assert_eq!(json["marker_percent"], 100.0);

        let json = run_json(Command::Uv {
            index: 1.0,
            risk: None,
        });
        assert_eq!(json["risk"], "Low");
    }

    #[test]
    fn test_condition_command() {
        let cmd = Command::Condition {
            text: "Light Rain Showers".into(),
        };
        assert_eq!(run(&cmd, &AppConfig::default(), false).unwrap(), "rain");
    }

    #[test]
    fn test_timeline_command() {
        let json = run_json(Command::Timeline {
            sunrise: "06:00".into(),
            sunset: "18:00".into(),
            now: "12:00".into(),
            position: None,
        });
        assert_eq!(json["fill_percent"], 50.0);
        assert_eq!(json["points"][2]["label"], "Sunset");
    }

    #[test]
    fn test_dashboard_command_reads_configured_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.toml");
        std::fs::write(&path, "username = \"Kai\"\n").unwrap();

        let mut config = AppConfig::default();
        config.dashboard.input = Some(path);
        let out = run(&Command::Dashboard { input: None }, &config, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["greeting"]["username"], "Kai");
    }

    #[test]
    fn test_dashboard_command_missing_file_errors() {
        let cmd = Command::Dashboard {
            input: Some(PathBuf::from("/nonexistent/readings.toml")),
        };
        assert!(matches!(
            run(&cmd, &AppConfig::default(), true),
            Err(CliError::Core(_))
        ));
    }

    #[test]
    fn test_token_file_only_for_token_command() {
        let mut config = AppConfig::default();
        config.tokens.path = Some(PathBuf::from("/broken/tokens.toml"));

        let aqi = Command::Aqi {
            value: 35.0,
            quality: None,
        };
        assert_eq!(token_file(&aqi, None, &config), None);
        assert_eq!(token_file(&aqi, Some(Path::new("brand.toml")), &config), None);

        let token = Command::Token {
            path: "colors.primary.500".into(),
        };
        assert_eq!(
            token_file(&token, None, &config),
            Some(Path::new("/broken/tokens.toml"))
        );
        assert_eq!(
            token_file(&token, Some(Path::new("brand.toml")), &config),
            Some(Path::new("brand.toml"))
        );
        assert_eq!(token_file(&token, None, &AppConfig::default()), None);
    }

    #[test]
    fn test_token_command() {
        let cmd = Command::Token {
            path: "colors.secondary.500".into(),
        };
        assert_eq!(run(&cmd, &AppConfig::default(), true).unwrap(), "#ff9447");

        let cmd = Command::Token {
            path: "colors.nope".into(),
        };
        assert!(matches!(
            run(&cmd, &AppConfig::default(), true),
            Err(CliError::Tokens(_))
        ));
    }
}
