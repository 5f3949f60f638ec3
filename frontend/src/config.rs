use std::fmt;

use log::{info, warn, Level};
use serde::{Deserialize, Serialize};

use crate::gradient::color::Hsl;
use crate::gradient::palette::DEFAULT_STOPS;

/// `<meta name="scroll-background" content="{...}">` overrides the defaults below.
pub const CONFIG_META_NAME: &str = "scroll-background";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub palette: Vec<Hsl>,
    pub opacity: OpacityRamp,
    pub angle: AngleSweep,
    pub orbit: FocusOrbit,
    pub transition: Transition,
}

/// Base layer opacity is `base + progress * range`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpacityRamp {
    pub base: f64,
    pub range: f64,
}

/// Linear gradient angle in degrees is `start + progress * sweep`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleSweep {
    pub start: f64,
    pub sweep: f64,
}

/// The radial glow centre circles (50%, 50%) at `radius` percent,
/// completing `turns` laps over the whole page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusOrbit {
    pub radius: f64,
    pub turns: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub duration_secs: f64,
    pub easing: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_STOPS.to_vec(),
            opacity: OpacityRamp::default(),
            angle: AngleSweep::default(),
            orbit: FocusOrbit::default(),
            transition: Transition::default(),
        }
    }
}

impl Default for OpacityRamp {
    fn default() -> Self {
        Self { base: 0.04, range: 0.06 }
    }
}

impl Default for AngleSweep {
    fn default() -> Self {
        Self { start: 135.0, sweep: 180.0 }
    }
}

impl Default for FocusOrbit {
    fn default() -> Self {
        Self { radius: 25.0, turns: 2.0 }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_secs: 0.5,
            easing: "ease-out".to_string(),
        }
    }
}

impl Transition {
    pub fn to_css(&self) -> String {
        format!("background {}s {}", self.duration_secs, self.easing)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    EmptyPalette,
    ColorOutOfRange { index: usize },
    InvalidTransition,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "failed to parse background config: {}", e),
            ConfigError::EmptyPalette => write!(f, "palette needs at least one colour"),
            ConfigError::ColorOutOfRange { index } => {
                write!(f, "palette colour {} is outside hsl(0-360 0-100% 0-100%)", index)
            }
            ConfigError::InvalidTransition => {
                write!(f, "transition needs a non-negative duration and an easing")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl BackgroundConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BackgroundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(index) = self.palette.iter().position(|c| !c.in_gamut()) {
            return Err(ConfigError::ColorOutOfRange { index });
        }
        let transition = &self.transition;
        if !transition.duration_secs.is_finite()
            || transition.duration_secs < 0.0
            || transition.easing.trim().is_empty()
        {
            return Err(ConfigError::InvalidTransition);
        }
        Ok(())
    }
}

/// Reads the config from the page's meta tag. Falls back to defaults when the
/// tag is missing or holds something we can't use.
pub fn load() -> BackgroundConfig {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    match content {
        None => {
            info!("No background config on the page, using defaults");
            BackgroundConfig::default()
        }
        Some(json) => match BackgroundConfig::from_json(&json) {
            Ok(config) => {
                info!("Loaded background config with {} colours", config.palette.len());
                config
            }
            Err(e) => {
                warn!("Ignoring background config: {}", e);
                BackgroundConfig::default()
            }
        },
    }
}
