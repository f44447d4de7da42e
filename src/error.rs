//! Error types.
//!
//! The interaction core has a single checked failure kind,
//! [`RegressionError::InvalidArgument`]. Event handling never fails; only
//! construction (datasets, model helpers) and configuration loading do.

use thiserror::Error;

use crate::config::ConfigLoadError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RegressionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RegressionError::InvalidArgument(msg.into())
    }
}

/// Errors surfaced by the standalone binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error while loading config: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("Error while building dataset: {0}")]
    Dataset(#[from] RegressionError),
    #[error("Error while running GUI: {0}")]
    Gui(#[from] eframe::Error),
}
