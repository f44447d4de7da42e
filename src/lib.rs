//! Regression playground crate root: re-exports and module wiring.
//!
//! An interactive teaching tool for simple linear regression built on
//! egui/eframe. The user drags a line (or moves two sliders) over a seeded
//! noisy sample and watches the total squared error respond.
//!
//! Modules:
//! - `data`: dataset generation, the regression model, the interaction
//!   state machine and its derived view
//! - `render`: the render binding port the core drives
//! - `controllers`: programmatic parameter control from other threads
//! - `config`: configuration and YAML loading
//! - `app` / `panels`: the egui surface

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod panels;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_playground, PlotScene, RegressionApp};
pub use config::{ConfigFile, ConfigLoadError, FeatureFlags, RegressionConfig, SliderRange};
pub use controllers::{ParametersController, ParametersRequest, ParametersUpdate};
pub use data::dataset::{DatasetSpec, Sample};
pub use data::interaction::{
    DragState, GestureEvent, HitTarget, HitTolerance, InteractionController, InteractionMode,
    InteractionSettings, PlotScale,
};
pub use data::model::{predict, total_squared_error, RegressionParameters};
pub use data::view::{DerivedView, ErrorBarConfig};
pub use error::{AppError, RegressionError};
pub use render::{ControlPoint, RenderBinding, RenderCommand, RenderLog};
