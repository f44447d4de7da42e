//! Regression model: the line `y = slope * x + intercept` and its error.
//!
//! Everything here is pure. There is no fitting; parameters only change
//! through user manipulation.

use serde::{Deserialize, Serialize};

use crate::error::RegressionError;

/// Slope and intercept of the line currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionParameters {
    pub slope: f64,
    pub intercept: f64,
}

impl Default for RegressionParameters {
    fn default() -> Self {
        Self {
            slope: 1.0,
            intercept: 1.0,
        }
    }
}

impl RegressionParameters {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Line value at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Both components are finite.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }

    /// Equation label, two decimals per coefficient (e.g. `y = 3.00x + -1.25`).
    pub fn equation(&self) -> String {
        format!("y = {:.2}x + {:.2}", self.slope, self.intercept)
    }

    /// Line through `(x0, y0)` and `(x1, y1)`.
    pub fn through_points(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, RegressionError> {
        let dx = x1 - x0;
        if dx == 0.0 || !dx.is_finite() {
            return Err(RegressionError::invalid(format!(
                "cannot solve a line through two points with x0 = x1 = {x0}"
            )));
        }
        let slope = (y1 - y0) / dx;
        Ok(Self {
            slope,
            intercept: y0 - slope * x0,
        })
    }
}

/// Elementwise `slope * x + intercept`.
pub fn predict(xs: &[f64], slope: f64, intercept: f64) -> Vec<f64> {
    xs.iter().map(|&x| slope * x + intercept).collect()
}

/// Sum of squared differences between `y_true` and `y_pred`.
///
/// Both sequences must have the same length.
pub fn total_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, RegressionError> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::invalid(format!(
            "length mismatch: y_true has {} values but y_pred has {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    Ok(squared_error_sum(y_true, y_pred))
}

// Callers guarantee equal lengths.
pub(crate) fn squared_error_sum(y_true: &[f64], y_pred: &[f64]) -> f64 {
    y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| {
            let d = t - p;
            d * d
        })
        .sum()
}
