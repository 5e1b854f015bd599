use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::TokenError;
use crate::DEFAULT_TOKENS_TOML;

/// The full token catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub meta: TokenMeta,
    pub colors: ColorTokens,
    pub gradients: BTreeMap<String, Gradient>,
    pub typography: Typography,
    pub shadows: BTreeMap<String, String>,
    pub radii: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub transitions: Transitions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMeta {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Palette,
    pub secondary: Palette,
    pub accent1: Palette,
    pub accent2: Palette,
    pub gray: Palette,
    pub state: StateColors,
}

/// A ten-step tonal palette, 50 (lightest) to 900 (darkest).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(rename = "50")]
    pub s50: Rgba,
    #[serde(rename = "100")]
    pub s100: Rgba,
    #[serde(rename = "200")]
    pub s200: Rgba,
    #[serde(rename = "300")]
    pub s300: Rgba,
    #[serde(rename = "400")]
    pub s400: Rgba,
    #[serde(rename = "500")]
    pub s500: Rgba,
    #[serde(rename = "600")]
    pub s600: Rgba,
    #[serde(rename = "700")]
    pub s700: Rgba,
    #[serde(rename = "800")]
    pub s800: Rgba,
    #[serde(rename = "900")]
    pub s900: Rgba,
}

impl Palette {
    pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

    pub fn shade(&self, step: u16) -> Option<Rgba> {
        match step {
            50 => Some(self.s50),
            100 => Some(self.s100),
            200 => Some(self.s200),
            300 => Some(self.s300),
            400 => Some(self.s400),
            500 => Some(self.s500),
            600 => Some(self.s600),
            700 => Some(self.s700),
            800 => Some(self.s800),
            900 => Some(self.s900),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateColors {
    pub success: Rgba,
    pub warning: Rgba,
    pub danger: Rgba,
    pub info: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgba,
    /// Stop position, percent.
    pub at: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    /// Degrees; linear gradients only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<u16>,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// CSS `background-image` value.
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.to_css(), s.at))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear => {
                format!("linear-gradient({}deg, {stops})", self.angle.unwrap_or(180))
            }
            GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_families: FontFamilies,
    pub font_sizes: BTreeMap<String, String>,
    pub font_weights: BTreeMap<String, u16>,
    pub line_heights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub heading: String,
    pub display: String,
    pub body: String,
    pub mono: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub durations_ms: BTreeMap<String, u32>,
    pub timing_functions: BTreeMap<String, String>,
}

impl DesignTokens {
    /// Parse a catalog from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, TokenError> {
        toml::from_str(toml_str).map_err(|e| TokenError::Parse(e.to_string()))
    }

    /// Read a catalog file from disk.
    pub fn from_file(path: &Path) -> Result<Self, TokenError> {
        let content = std::fs::read_to_string(path)?;
        let tokens = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %tokens.meta.name, "Read token file");
        Ok(tokens)
    }

    /// The embedded catalog.
    pub fn embedded() -> Self {
        Self::from_toml(DEFAULT_TOKENS_TOML).expect("embedded token catalog is valid TOML")
    }

    /// Look up a token by dotted path, e.g. `colors.primary.500`,
    /// `shadows.card` or `typography.font_weights.bold`.
    ///
    /// Leaves come back in their display form: colors as hex, gradients as
    /// CSS. Paths that stop at a group are rejected.
    pub fn lookup(&self, path: &str) -> Result<String, TokenError> {
        let unknown = || TokenError::UnknownToken(path.to_string());

        if let Some(name) = path.strip_prefix("gradients.") {
            return self.gradients.get(name).map(Gradient::to_css).ok_or_else(unknown);
        }

        let tree = serde_json::to_value(self).map_err(|e| TokenError::Parse(e.to_string()))?;
        let leaf = path
            .split('.')
            .try_fold(&tree, |node, key| node.get(key))
            .ok_or_else(unknown)?;

        match leaf {
            serde_json::Value::String(s) => Ok(s.clone()),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            _ => Err(unknown()),
        }
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self::embedded()
    }
}
