//! Render binding: the port through which the interaction core pushes
//! visual updates.
//!
//! The core never reads anything back from the surface. Pointer coordinates
//! arrive separately, already converted to data space by the surface.

/// Which of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    /// Handle at the left domain boundary (`x_min`).
    Start,
    /// Handle at the right domain boundary (`x_max`).
    End,
}

/// A render surface the controller can drive.
pub trait RenderBinding {
    /// Replace the regression line with the given `[x, y]` vertices.
    fn set_line(&mut self, points: &[[f64; 2]]);
    fn set_control_point(&mut self, which: ControlPoint, position: [f64; 2]);
    fn set_equation_text(&mut self, text: &str);
    fn set_error_bar_width(&mut self, value: f64);
    /// Upper bound of the error bar axis.
    fn set_error_bar_scale(&mut self, max: f64);
    fn request_redraw(&mut self);
}

impl<R: RenderBinding + ?Sized> RenderBinding for &mut R {
    fn set_line(&mut self, points: &[[f64; 2]]) {
        (**self).set_line(points)
    }
    fn set_control_point(&mut self, which: ControlPoint, position: [f64; 2]) {
        (**self).set_control_point(which, position)
    }
    fn set_equation_text(&mut self, text: &str) {
        (**self).set_equation_text(text)
    }
    fn set_error_bar_width(&mut self, value: f64) {
        (**self).set_error_bar_width(value)
    }
    fn set_error_bar_scale(&mut self, max: f64) {
        (**self).set_error_bar_scale(max)
    }
    fn request_redraw(&mut self) {
        (**self).request_redraw()
    }
}

/// One call made on a [`RenderBinding`], as recorded by [`RenderLog`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    SetLine(Vec<[f64; 2]>),
    SetControlPoint(ControlPoint, [f64; 2]),
    SetEquationText(String),
    SetErrorBarWidth(f64),
    SetErrorBarScale(f64),
    RequestRedraw,
}

/// Headless surface that records every command in call order.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    pub commands: Vec<RenderCommand>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of completed update batches (one redraw request per batch).
    pub fn redraw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::RequestRedraw))
            .count()
    }

    /// Most recent equation text, if any was pushed.
    pub fn last_equation(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::SetEquationText(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Most recent error bar scale, if any was pushed.
    pub fn last_error_scale(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::SetErrorBarScale(v) => Some(*v),
            _ => None,
        })
    }

    pub fn last_control_point(&self, which: ControlPoint) -> Option<[f64; 2]> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::SetControlPoint(w, p) if *w == which => Some(*p),
            _ => None,
        })
    }
}

impl RenderBinding for RenderLog {
    fn set_line(&mut self, points: &[[f64; 2]]) {
        self.commands.push(RenderCommand::SetLine(points.to_vec()));
    }

    fn set_control_point(&mut self, which: ControlPoint, position: [f64; 2]) {
        self.commands
            .push(RenderCommand::SetControlPoint(which, position));
    }

    fn set_equation_text(&mut self, text: &str) {
        self.commands
            .push(RenderCommand::SetEquationText(text.to_string()));
    }

    fn set_error_bar_width(&mut self, value: f64) {
        self.commands.push(RenderCommand::SetErrorBarWidth(value));
    }

    fn set_error_bar_scale(&mut self, max: f64) {
        self.commands.push(RenderCommand::SetErrorBarScale(max));
    }

    fn request_redraw(&mut self) {
        self.commands.push(RenderCommand::RequestRedraw);
    }
}
