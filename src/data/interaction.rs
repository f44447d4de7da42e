//! Interaction state machine: turns pointer gestures and slider values into
//! new regression parameters and pushes the resulting view to a
//! [`RenderBinding`].
//!
//! One [`InteractionController`] owns the parameters and the drag state.
//! Every event runs to completion, including the render step, before the
//! next one is handled. Event handling is total: malformed input is ignored,
//! never reported as an error.

use serde::{Deserialize, Serialize};

use super::dataset::Sample;
use super::model::RegressionParameters;
use super::view::{DerivedView, ErrorBarConfig};
use crate::render::{ControlPoint, RenderBinding};

/// How parameters are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Drag the control points or the line on the plot.
    #[default]
    DirectManipulation,
    /// Slope and intercept come from numeric controls; no drag state.
    DeclarativeControl,
}

impl InteractionMode {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionMode::DirectManipulation => "Drag",
            InteractionMode::DeclarativeControl => "Sliders",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::DirectManipulation => InteractionMode::DeclarativeControl,
            InteractionMode::DeclarativeControl => InteractionMode::DirectManipulation,
        }
    }
}

/// Transient gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingStart,
    DraggingEnd,
    /// Dragging the line body; holds the y of the previous pointer event.
    DraggingLine { last_pointer_y: f64 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ControlPoint(ControlPoint),
    Line,
}

/// Input events. Positions are data-space `[x, y]`; `None` means the
/// pointer could not be resolved (e.g. it left the plot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PointerDown(Option<[f64; 2]>),
    PointerMove(Option<[f64; 2]>),
    PointerUp,
    ParametersSet { slope: f64, intercept: f64 },
}

/// Hit-test tolerances in surface units (pixels for the GUI).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerance {
    /// Radius around a control point.
    pub control_point_radius: f64,
    /// Perpendicular distance from the line.
    pub line_band: f64,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            control_point_radius: 8.0,
            line_band: 5.0,
        }
    }
}

/// Data units per surface unit on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScale {
    pub x_per_unit: f64,
    pub y_per_unit: f64,
}

impl Default for PlotScale {
    fn default() -> Self {
        Self {
            x_per_unit: 1.0,
            y_per_unit: 1.0,
        }
    }
}

impl PlotScale {
    fn is_valid(&self) -> bool {
        [self.x_per_unit, self.y_per_unit]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Static settings of a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    pub mode: InteractionMode,
    /// Parameters restored by reset in direct-manipulation mode.
    pub direct_defaults: RegressionParameters,
    /// Parameters restored by reset in declarative mode (slider defaults).
    pub declarative_defaults: RegressionParameters,
    pub tolerance: HitTolerance,
    pub error_bar: ErrorBarConfig,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            mode: InteractionMode::default(),
            direct_defaults: RegressionParameters::default(),
            declarative_defaults: RegressionParameters::default(),
            tolerance: HitTolerance::default(),
            error_bar: ErrorBarConfig::default(),
        }
    }
}

impl InteractionSettings {
    pub fn defaults_for(&self, mode: InteractionMode) -> RegressionParameters {
        match mode {
            InteractionMode::DirectManipulation => self.direct_defaults,
            InteractionMode::DeclarativeControl => self.declarative_defaults,
        }
    }
}

/// Owner of the regression parameters and the drag state.
pub struct InteractionController<R: RenderBinding> {
    sample: Sample,
    settings: InteractionSettings,
    mode: InteractionMode,
    parameters: RegressionParameters,
    drag: DragState,
    scale: PlotScale,
    view: DerivedView,
    binding: R,
}

impl<R: RenderBinding> InteractionController<R> {
    /// Create a controller at the defaults of `settings.mode`.
    ///
    /// Nothing is pushed to `binding` until [`render_initial`](Self::render_initial)
    /// or the first parameter change.
    pub fn new(sample: Sample, settings: InteractionSettings, binding: R) -> Self {
        let mode = settings.mode;
        let parameters = settings.defaults_for(mode);
        let view = DerivedView::compute(&sample, parameters, &settings.error_bar, 0.0);
        Self {
            sample,
            settings,
            mode,
            parameters,
            drag: DragState::Idle,
            scale: PlotScale::default(),
            view,
            binding,
        }
    }

    /// Controller with default settings.
    pub fn with_defaults(sample: Sample, binding: R) -> Self {
        Self::new(sample, InteractionSettings::default(), binding)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn parameters(&self) -> RegressionParameters {
        self.parameters
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn plot_scale(&self) -> PlotScale {
        self.scale
    }

    /// Latest derived view.
    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    pub fn binding(&self) -> &R {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut R {
        &mut self.binding
    }

    pub fn into_binding(self) -> R {
        self.binding
    }

    // ─────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────

    /// Update the data-per-surface-unit scale used for hit-testing.
    /// Non-finite or non-positive scales are ignored.
    pub fn set_plot_scale(&mut self, scale: PlotScale) {
        if scale.is_valid() {
            self.scale = scale;
        }
    }

    /// Switch between dragging and slider control. Any active drag is
    /// abandoned; parameters are kept.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode == self.mode {
            return;
        }
        log::info!("interaction mode: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.drag = DragState::Idle;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────

    /// Push the current view once, as drawn before any interaction.
    pub fn render_initial(&mut self) {
        self.view.push_to(&self.sample, &mut self.binding);
    }

    /// Restore the current mode's default parameters and clear any drag.
    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
        let defaults = self.settings.defaults_for(self.mode);
        log::debug!("reset to {:?}", defaults);
        self.apply(defaults);
    }

    /// Dispatch one event. Returns `true` when the parameters changed.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::PointerDown(pos) => {
                self.pointer_down(pos);
                false
            }
            GestureEvent::PointerMove(pos) => self.pointer_move(pos),
            GestureEvent::PointerUp => {
                self.pointer_up();
                false
            }
            GestureEvent::ParametersSet { slope, intercept } => {
                self.set_parameters(slope, intercept)
            }
        }
    }

    /// Begin a gesture at `pos`, resolving what was grabbed.
    pub fn pointer_down(&mut self, pos: Option<[f64; 2]>) {
        if self.mode == InteractionMode::DeclarativeControl {
            return;
        }
        let Some(pos) = pos.filter(|p| is_finite_pos(*p)) else {
            self.drag = DragState::Idle;
            return;
        };
        self.drag = match self.hit_test(pos) {
            Some(HitTarget::ControlPoint(ControlPoint::Start)) => DragState::DraggingStart,
            Some(HitTarget::ControlPoint(ControlPoint::End)) => DragState::DraggingEnd,
            Some(HitTarget::Line) => DragState::DraggingLine {
                last_pointer_y: pos[1],
            },
            None => DragState::Idle,
        };
        log::debug!("pointer down at {:?}: {:?}", pos, self.drag);
    }

    /// Continue the gesture. Returns `true` when the parameters changed.
    pub fn pointer_move(&mut self, pos: Option<[f64; 2]>) -> bool {
        if self.mode == InteractionMode::DeclarativeControl {
            return false;
        }
        let Some([_, y]) = pos.filter(|p| is_finite_pos(*p)) else {
            return false;
        };
        let (x0, x1) = (self.sample.x_min(), self.sample.x_max());
        let p = self.parameters;
        let next = match self.drag {
            DragState::Idle => return false,
            DragState::DraggingStart => {
                RegressionParameters::through_points(x0, y, x1, p.eval(x1))
            }
            DragState::DraggingEnd => RegressionParameters::through_points(x0, p.eval(x0), x1, y),
            DragState::DraggingLine { last_pointer_y } => Ok(RegressionParameters::new(
                p.slope,
                p.intercept + (y - last_pointer_y),
            )),
        };
        let applied = match next {
            Ok(next) if next.is_finite() => self.apply(next),
            _ => false,
        };
        // Re-anchor on every accepted move: displacement accumulates per event.
        if applied {
            if let DragState::DraggingLine { .. } = self.drag {
                self.drag = DragState::DraggingLine { last_pointer_y: y };
            }
        }
        applied
    }

    /// End the gesture.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("drag released at {:?}", self.parameters);
        }
        self.drag = DragState::Idle;
    }

    /// Overwrite the parameters (slider path). Drag state is untouched.
    /// Non-finite values, or values whose total error overflows, are ignored.
    pub fn set_parameters(&mut self, slope: f64, intercept: f64) -> bool {
        let next = RegressionParameters::new(slope, intercept);
        if !next.is_finite() {
            return false;
        }
        self.apply(next)
    }

    /// Which element, if any, lies under `pos`. Priority: start, end, line.
    pub fn hit_test(&self, pos: [f64; 2]) -> Option<HitTarget> {
        let tol = self.settings.tolerance;
        for which in [ControlPoint::Start, ControlPoint::End] {
            let [cx, cy] = self.view.control_point(which);
            let dx = (pos[0] - cx) / self.scale.x_per_unit;
            let dy = (pos[1] - cy) / self.scale.y_per_unit;
            if dx * dx + dy * dy <= tol.control_point_radius * tol.control_point_radius {
                return Some(HitTarget::ControlPoint(which));
            }
        }
        if pos[0] < self.sample.x_min() || pos[0] > self.sample.x_max() {
            return None;
        }
        let vertical = (pos[1] - self.parameters.eval(pos[0])) / self.scale.y_per_unit;
        let slope = self.parameters.slope * self.scale.x_per_unit / self.scale.y_per_unit;
        let distance = vertical.abs() / (1.0 + slope * slope).sqrt();
        (distance <= tol.line_band).then_some(HitTarget::Line)
    }

    // Post-transition step: recompute the view and push it. Parameters whose
    // error overflows are rejected so the error axis stays finite.
    fn apply(&mut self, parameters: RegressionParameters) -> bool {
        let view = DerivedView::compute(
            &self.sample,
            parameters,
            &self.settings.error_bar,
            self.view.error_scale_max,
        );
        if !view.total_error.is_finite() {
            log::debug!("ignored {:?}: total error overflows", parameters);
            return false;
        }
        self.parameters = parameters;
        self.view = view;
        log::trace!(
            "{} (error {:.3})",
            self.view.equation,
            self.view.total_error
        );
        self.view.push_to(&self.sample, &mut self.binding);
        true
    }
}

fn is_finite_pos(p: [f64; 2]) -> bool {
    p[0].is_finite() && p[1].is_finite()
}
