//! Appearance settings: design style, tuning knobs, and colour theme.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Key the design settings are stored under.
pub const DESIGN_SETTINGS_KEY: &str = "currency-converter-design";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    #[default]
    Glass,
    Minimal,
    Classic,
}

impl DesignStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignStyle::Glass => "glass",
            DesignStyle::Minimal => "minimal",
            DesignStyle::Classic => "classic",
        }
    }
}

impl FromStr for DesignStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "glass" => Ok(DesignStyle::Glass),
            "minimal" => Ok(DesignStyle::Minimal),
            "classic" => Ok(DesignStyle::Classic),
            _ => Err(format!("Unknown design style: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSettings {
    pub style: DesignStyle,
    /// 0.0 to 1.0
    pub glassmorphism_intensity: f64,
    /// Base corner radius in px
    pub border_radius: f64,
    /// 0.0 to 1.0
    pub shadow_intensity: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            style: DesignStyle::Glass,
            glassmorphism_intensity: 0.8,
            border_radius: 16.0,
            shadow_intensity: 0.6,
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSettingsUpdate {
    pub style: Option<DesignStyle>,
    pub glassmorphism_intensity: Option<f64>,
    pub border_radius: Option<f64>,
    pub shadow_intensity: Option<f64>,
}

impl DesignSettings {
    /// Apply `update` and validate the result. `self` is untouched on error.
    pub fn apply(&self, update: &DesignSettingsUpdate) -> Result<DesignSettings> {
        let merged = DesignSettings {
            style: update.style.unwrap_or(self.style),
            glassmorphism_intensity: update
                .glassmorphism_intensity
                .unwrap_or(self.glassmorphism_intensity),
            border_radius: update.border_radius.unwrap_or(self.border_radius),
            shadow_intensity: update.shadow_intensity.unwrap_or(self.shadow_intensity),
        };
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("glassmorphismIntensity", self.glassmorphism_intensity)?;
        check_unit_interval("shadowIntensity", self.shadow_intensity)?;
        if !self.border_radius.is_finite() || self.border_radius < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "borderRadius must be a non-negative number, got {}",
                self.border_radius
            ))
            .into());
        }
        Ok(())
    }

    /// CSS custom properties derived from these settings.
    pub fn css_variables(&self) -> BTreeMap<&'static str, String> {
        let glass_opacity = self.glassmorphism_intensity;
        let radius = self.border_radius;

        let mut vars = BTreeMap::new();
        vars.insert("--glass-opacity", glass_opacity.to_string());
        vars.insert(
            "--backdrop-blur-intensity",
            format!("{}px", 10.0 + glass_opacity * 15.0),
        );
        vars.insert("--radius-base", format!("{}px", radius));
        vars.insert("--radius-sm", format!("{}px", radius * 0.5));
        vars.insert("--radius-md", format!("{}px", radius * 0.75));
        vars.insert("--radius-lg", format!("{}px", radius * 1.25));
        vars.insert("--radius-xl", format!("{}px", radius * 1.5));
        vars.insert("--shadow-intensity", self.shadow_intensity.to_string());

        match self.style {
            DesignStyle::Minimal => {
                vars.insert("--border-glass-opacity", "0.1".to_string());
                vars.insert("--bg-glass-opacity", "0.05".to_string());
            }
            DesignStyle::Classic => {
                vars.insert("--border-glass-opacity", "0.3".to_string());
                vars.insert("--bg-glass-opacity", "0.8".to_string());
                vars.insert("--backdrop-blur-intensity", "0px".to_string());
            }
            DesignStyle::Glass => {
                vars.insert("--border-glass-opacity", "0.2".to_string());
                vars.insert("--bg-glass-opacity", glass_opacity.to_string());
            }
        }
        vars
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInput(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        ))
        .into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}
