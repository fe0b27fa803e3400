//! Theme configuration: palette, spacing scale and base font size.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use crate::error::json_type;
use crate::{ConfigError, Normalizer, PaletteOutput};

/// Input of [`run`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Base font size in px, i.e. the number of px in `1rem`.
    pub rem_factor: f64,
    /// Palette, see [`crate::palette`].
    pub colors: Value,
    /// Spacing scale in px.
    pub spacing: Vec<f64>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = |background: &str| json!({
            "primary": "#2A4CF1",
            "secondary": "#FF9100",
            "error": "#f44336",
            "warning": "#ff9800",
            "info": "#2196f3",
            "success": "#4caf50",
            "divider": "rgba(0, 0, 0, 0.12)",
            "text": "#1E1D1D",
            "background": background,
        });
        ThemeConfig {
            rem_factor: 16.,
            colors: json!({ "light": colors("#fafafa"),
                            "dark": colors("#303030") }),
            spacing: vec![0., 2., 4., 6., 8., 10., 12., 14., 16.],
        }
    }
}

impl ThemeConfig {
    /// Read a configuration from plain data.  Missing fields take
    /// their default value.
    pub fn from_value(v: Value) -> Result<Self, ConfigError> {
        if !v.is_object() {
            return Err(ConfigError::NotAnObject(json_type(&v)));
        }
        Ok(serde_json::from_value(v)?)
    }
}

/// Output of [`run`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// `None` when the configuration has no palette object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PaletteOutput>,
    /// Spacing scale in `rem`.
    pub spacing: Vec<String>,
}

/// Express `px` in `rem` for a base font size of `rem_factor` px.
///
/// ```
/// assert_eq!(theme_shades::px_to_rem(8., 16.), "0.5rem");
/// assert_eq!(theme_shades::px_to_rem(32., 16.), "2rem");
/// ```
pub fn px_to_rem(px: f64, rem_factor: f64) -> String {
    format!("{}rem", px / rem_factor)
}

/// Apply the color and spacing rules to `config` with the default
/// [`Normalizer`].
pub fn run(config: &ThemeConfig) -> Result<Theme, ConfigError> {
    run_with(config, &Normalizer::default())
}

/// Apply the color and spacing rules to `config`.
pub fn run_with(config: &ThemeConfig, normalizer: &Normalizer)
                -> Result<Theme, ConfigError> {
    if !(config.rem_factor.is_finite() && config.rem_factor > 0.) {
        return Err(ConfigError::InvalidRemFactor(config.rem_factor));
    }
    let colors = if config.colors.is_object() {
        Some(normalizer.normalize(&config.colors)?)
    } else {
        debug!(found = json_type(&config.colors), "no palette, color rule skipped");
        None
    };
    let spacing = config.spacing.iter()
        .map(|&px| px_to_rem(px, config.rem_factor))
        .collect();
    Ok(Theme { colors, spacing })
}
