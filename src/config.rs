//! Settings: engine pacing and cylinder geometry, loaded from TOML and the
//! environment.
//!
//! Sources, lowest priority first: built-in defaults, the config file, then
//! `ROLODEX_*` environment variables (nested keys use `__`, e.g.
//! `ROLODEX_ROLODEX__ITEM_COUNT=40`).

use crate::actor::EngineConfig;
use crate::error::ConfigError;
use crate::wheel::{CylinderGeometry, Entry, ScrollTuning};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Terminal engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Frames per second for the render loop.
    pub target_fps: u32,
    /// Input poll timeout in milliseconds.
    pub input_poll_ms: u64,
    /// Use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Capture mouse events (needed for wheel and drag).
    pub enable_mouse: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            target_fps: 60,
            input_poll_ms: 10,
            alternate_screen: true,
            enable_mouse: true,
        }
    }
}

impl EngineSettings {
    /// Convert to the engine's runtime configuration.
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            target_fps: self.target_fps,
            input_poll_timeout: Duration::from_millis(self.input_poll_ms),
            enable_mouse: self.enable_mouse,
            alternate_screen: self.alternate_screen,
        }
    }
}

/// Rolodex widget settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RolodexConfig {
    /// Total items on the cylinder, real entries first.
    pub item_count: usize,
    /// Arc length between items, in pixels.
    pub item_height: f64,
    /// Cylinder radius, in pixels.
    pub radius: f64,
    /// Degrees per pixel of wheel delta.
    pub scroll_sensitivity: f64,
    /// Degrees per pixel of drag travel.
    pub drag_sensitivity: f64,
    /// Fraction of the remaining distance eased per frame.
    pub ease_factor: f64,
    /// Gap (degrees) below which easing settles.
    pub settle_epsilon: f64,
    /// Pixels represented by one terminal row.
    pub row_height_px: f64,
    /// Pixels of wheel delta per wheel notch.
    pub wheel_notch_px: f64,
    /// Prefix for item codes (`FL` gives `FL-001`).
    pub code_prefix: String,
    /// Real entries, in order.
    pub entries: Vec<Entry>,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        let tuning = ScrollTuning::default();
        Self {
            item_count: 60,
            item_height: 60.0,
            radius: 400.0,
            scroll_sensitivity: tuning.scroll_sensitivity,
            drag_sensitivity: tuning.drag_sensitivity,
            ease_factor: tuning.ease_factor,
            settle_epsilon: tuning.settle_epsilon,
            row_height_px: 20.0,
            wheel_notch_px: 100.0,
            code_prefix: "FL".to_string(),
            entries: vec![
                Entry::new("The Tortoise and the Hare", "fables/title1.html"),
                Entry::new("The Boy Who Cried Wolf", "fables/title2.html"),
                Entry::new("The Fox and the Grapes", "fables/title3.html"),
            ],
        }
    }
}

impl RolodexConfig {
    /// Cylinder dimensions.
    pub const fn geometry(&self) -> CylinderGeometry {
        CylinderGeometry {
            item_count: self.item_count,
            item_height: self.item_height,
            radius: self.radius,
        }
    }

    /// Input and easing constants.
    pub const fn tuning(&self) -> ScrollTuning {
        ScrollTuning {
            scroll_sensitivity: self.scroll_sensitivity,
            drag_sensitivity: self.drag_sensitivity,
            ease_factor: self.ease_factor,
            settle_epsilon: self.settle_epsilon,
        }
    }
}

/// Everything the binary reads at startup.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Terminal engine settings.
    pub engine: EngineSettings,
    /// Rolodex widget settings.
    pub rolodex: RolodexConfig,
}

impl Settings {
    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.rolodex;
        let checks = [
            (self.engine.target_fps >= 1, "engine.target_fps", "must be at least 1"),
            (r.item_count >= 1, "rolodex.item_count", "must be at least 1"),
            (positive(r.item_height), "rolodex.item_height", "must be positive"),
            (positive(r.radius), "rolodex.radius", "must be positive"),
            (positive(r.row_height_px), "rolodex.row_height_px", "must be positive"),
            (r.wheel_notch_px.is_finite(), "rolodex.wheel_notch_px", "must be finite"),
            (r.scroll_sensitivity.is_finite(), "rolodex.scroll_sensitivity", "must be finite"),
            (r.drag_sensitivity.is_finite(), "rolodex.drag_sensitivity", "must be finite"),
            (
                r.ease_factor > 0.0 && r.ease_factor <= 1.0,
                "rolodex.ease_factor",
                "must be in (0, 1]",
            ),
            (
                r.settle_epsilon >= 0.0 && r.settle_epsilon.is_finite(),
                "rolodex.settle_epsilon",
                "must be finite and not negative",
            ),
        ];

        match checks.into_iter().find(|(ok, _, _)| !ok) {
            Some((_, key, reason)) => Err(ConfigError::Invalid { key, reason }),
            None => Ok(()),
        }
    }
}

/// Finite and greater than zero.
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Default config file location for this platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("dev", "rolodex", "rolodex").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Load settings.
///
/// An explicit `path` must exist; otherwise the platform default is used if
/// present. Environment variables override both.
pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::from(default_config_path()?).required(false),
    };

    let settings: Settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("ROLODEX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    log::debug!("Loaded settings: {settings:?}");
    Ok(settings)
}

/// Parse settings from a TOML string (defaults fill the gaps).
pub fn from_toml(source: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.rolodex.item_count, 60);
        assert_eq!(settings.rolodex.entries.len(), 3);
        assert_eq!(settings.rolodex.tuning(), ScrollTuning::default());
    }

    #[test]
    fn test_from_toml_overrides_and_defaults() {
        let settings = from_toml(
            r#"
            [engine]
            target_fps = 30

            [rolodex]
            item_count = 12
            code_prefix = "TL"

            [[rolodex.entries]]
            title = "Only One"
            url = "one.html"
            "#,
        )
        .unwrap();

        assert_eq!(settings.engine.target_fps, 30);
        assert!(settings.engine.enable_mouse);
        assert_eq!(settings.rolodex.item_count, 12);
        assert!((settings.rolodex.radius - 400.0).abs() < f64::EPSILON);
        assert_eq!(settings.rolodex.code_prefix, "TL");
        assert_eq!(settings.rolodex.entries, vec![Entry::new("Only One", "one.html")]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = from_toml("[rolodex]\nitem_count = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "rolodex.item_count",
                ..
            }
        ));

        let err = from_toml("[rolodex]\nease_factor = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("rolodex.ease_factor"));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let cases: [(fn(&mut RolodexConfig), &str); 5] = [
            (|r| r.wheel_notch_px = f64::NAN, "rolodex.wheel_notch_px"),
            (|r| r.scroll_sensitivity = f64::INFINITY, "rolodex.scroll_sensitivity"),
            (|r| r.drag_sensitivity = f64::NEG_INFINITY, "rolodex.drag_sensitivity"),
            (|r| r.radius = f64::INFINITY, "rolodex.radius"),
            (|r| r.row_height_px = f64::NAN, "rolodex.row_height_px"),
        ];

        for (corrupt, expected) in cases {
            let mut settings = Settings::default();
            corrupt(&mut settings.rolodex);
            match settings.validate() {
                Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, expected),
                other => panic!("{expected}: expected Invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_from_toml_rejected() {
        let err = from_toml("[rolodex]\nscroll_sensitivity = nan\n").unwrap_err();
        assert!(err.to_string().contains("rolodex.scroll_sensitivity"));
    }

    #[test]
    fn test_engine_config_conversion() {
        let config = EngineSettings::default().to_engine_config();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.input_poll_timeout, Duration::from_millis(10));
        assert!(config.enable_mouse);
    }
}
