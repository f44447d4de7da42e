//! Derived view: everything the surface shows, computed from the sample and
//! the current parameters.

use serde::{Deserialize, Serialize};

use super::dataset::Sample;
use super::model::{self, RegressionParameters};
use crate::render::{ControlPoint, RenderBinding};

/// Error bar axis behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBarConfig {
    /// Axis maximum shown before any error exceeds it.
    pub initial_max: f64,
    /// Head-room added above the current error when the axis has to grow.
    pub margin: f64,
}

impl Default for ErrorBarConfig {
    fn default() -> Self {
        Self {
            initial_max: 500.0,
            margin: 10.0,
        }
    }
}

impl ErrorBarConfig {
    /// Axis maximum after observing `total_error`, never below `previous_max`.
    pub fn grow(&self, previous_max: f64, total_error: f64) -> f64 {
        previous_max
            .max(self.initial_max)
            .max(total_error + self.margin)
    }
}

/// Snapshot of the visual state for one parameter pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub parameters: RegressionParameters,
    /// Predicted y for every sample x.
    pub predictions: Vec<f64>,
    pub total_error: f64,
    pub start_point: [f64; 2],
    pub end_point: [f64; 2],
    pub equation: String,
    /// Error bar axis maximum in effect for this snapshot.
    pub error_scale_max: f64,
}

impl DerivedView {
    /// Compute the view; `previous_scale_max` is the error axis maximum so far.
    pub fn compute(
        sample: &Sample,
        parameters: RegressionParameters,
        error_bar: &ErrorBarConfig,
        previous_scale_max: f64,
    ) -> Self {
        let RegressionParameters { slope, intercept } = parameters;
        let predictions = model::predict(sample.xs(), slope, intercept);
        let total_error = model::squared_error_sum(sample.ys(), &predictions);
        let (x0, x1) = (sample.x_min(), sample.x_max());
        Self {
            parameters,
            total_error,
            start_point: [x0, parameters.eval(x0)],
            end_point: [x1, parameters.eval(x1)],
            equation: parameters.equation(),
            error_scale_max: error_bar.grow(previous_scale_max, total_error),
            predictions,
        }
    }

    /// Fitted line as `[x, y]` vertices, one per sample x.
    pub fn line_points(&self, sample: &Sample) -> Vec<[f64; 2]> {
        sample
            .xs()
            .iter()
            .zip(&self.predictions)
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    pub fn control_point(&self, which: ControlPoint) -> [f64; 2] {
        match which {
            ControlPoint::Start => self.start_point,
            ControlPoint::End => self.end_point,
        }
    }

    /// Push the whole snapshot to `binding`, ending with a redraw request.
    pub fn push_to<R: RenderBinding + ?Sized>(&self, sample: &Sample, binding: &mut R) {
        binding.set_line(&self.line_points(sample));
        binding.set_control_point(ControlPoint::Start, self.start_point);
        binding.set_control_point(ControlPoint::End, self.end_point);
        binding.set_equation_text(&self.equation);
        binding.set_error_bar_width(self.total_error);
        binding.set_error_bar_scale(self.error_scale_max);
        binding.request_redraw();
    }
}
