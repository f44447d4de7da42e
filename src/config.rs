//! Configuration for the playground window and its interaction core.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controllers::ParametersController;
use crate::data::dataset::DatasetSpec;
use crate::data::hotkeys::Hotkeys;
use crate::data::interaction::{HitTolerance, InteractionMode, InteractionSettings};
use crate::data::model::RegressionParameters;
use crate::data::view::ErrorBarConfig;

// ─────────────────────────────────────────────────────────────────────────────
// Slider ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Range, step and default of one numeric control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    pub const SLOPE: SliderRange = SliderRange {
        min: -10.0,
        max: 10.0,
        step: 0.1,
        default: 1.0,
    };

    pub const INTERCEPT: SliderRange = SliderRange {
        min: -20.0,
        max: 20.0,
        step: 0.1,
        default: 1.0,
    };

    pub fn range(&self) -> std::ops::RangeInclusive<f64> {
        self.min..=self.max
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle optional UI elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the top bar with mode/reset/screenshot buttons.
    pub top_bar: bool,
    pub legend: bool,
    pub grid: bool,
    /// Allow switching between dragging and sliders at runtime.
    pub mode_switch: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            top_bar: true,
            legend: true,
            grid: true,
            mode_switch: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RegressionConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `dataset`        | Seeded sample generation |
/// | `mode`           | Dragging or sliders at startup |
/// | `slope`/`intercept` | Slider ranges and declarative defaults |
/// | `error_bar`      | Error axis growth |
/// | `hit_tolerance`  | Grab radius (px) for handles and the line |
/// | `controllers`    | Programmatic interaction handles |
pub struct RegressionConfig {
    /// Native window title.
    pub title: String,
    pub dataset: DatasetSpec,
    pub mode: InteractionMode,
    /// Starting parameters in direct-manipulation mode.
    pub initial_parameters: RegressionParameters,
    pub slope: SliderRange,
    pub intercept: SliderRange,
    pub error_bar: ErrorBarConfig,
    pub hit_tolerance: HitTolerance,
    pub features: FeatureFlags,
    pub hotkeys: Hotkeys,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    pub parameters_controller: Option<ParametersController>,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            title: "Interactive Linear Regression".to_string(),
            dataset: DatasetSpec::default(),
            mode: InteractionMode::DirectManipulation,
            initial_parameters: RegressionParameters::default(),
            slope: SliderRange::SLOPE,
            intercept: SliderRange::INTERCEPT,
            error_bar: ErrorBarConfig::default(),
            hit_tolerance: HitTolerance::default(),
            features: FeatureFlags::default(),
            hotkeys: Hotkeys::default(),
            native_options: None,
            parameters_controller: None,
        }
    }
}

impl RegressionConfig {
    /// Settings for the interaction controller.
    pub fn interaction_settings(&self) -> InteractionSettings {
        InteractionSettings {
            mode: self.mode,
            direct_defaults: self.initial_parameters,
            declarative_defaults: RegressionParameters::new(
                self.slope.default,
                self.intercept.default,
            ),
            tolerance: self.hit_tolerance,
            error_bar: self.error_bar,
        }
    }

    /// Overlay the settings in a YAML file on top of `self`.
    pub fn load_yaml(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigLoadError> {
        let file = ConfigFile::load(path)?;
        file.apply_to(self);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serializable mirror
// ─────────────────────────────────────────────────────────────────────────────

/// YAML-loadable subset of [`RegressionConfig`]. Missing keys keep the
/// values already in the target config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub dataset: Option<DatasetSpec>,
    pub mode: Option<InteractionMode>,
    pub initial_parameters: Option<RegressionParameters>,
    pub slope: Option<SliderRange>,
    pub intercept: Option<SliderRange>,
    pub error_bar: Option<ErrorBarConfig>,
    pub hit_tolerance: Option<HitTolerance>,
    pub features: Option<FeatureFlags>,
    pub hotkeys: Option<Hotkeys>,
}

impl ConfigFile {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let s = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&s)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Apply stored settings to a config instance.
    pub fn apply_to(self, cfg: &mut RegressionConfig) {
        if let Some(v) = self.title {
            cfg.title = v;
        }
        if let Some(v) = self.dataset {
            cfg.dataset = v;
        }
        if let Some(v) = self.mode {
            cfg.mode = v;
        }
        if let Some(v) = self.initial_parameters {
            cfg.initial_parameters = v;
        }
        if let Some(v) = self.slope {
            cfg.slope = v;
        }
        if let Some(v) = self.intercept {
            cfg.intercept = v;
        }
        if let Some(v) = self.error_bar {
            cfg.error_bar = v;
        }
        if let Some(v) = self.hit_tolerance {
            cfg.hit_tolerance = v;
        }
        if let Some(v) = self.features {
            cfg.features = v;
        }
        if let Some(v) = self.hotkeys {
            cfg.hotkeys = v;
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}
