//! Retained scene state for the egui surface.
//!
//! egui redraws everything each frame, so the render binding simply stores
//! what the interaction core pushed and the panels read it back while
//! painting.

use eframe::egui;

use crate::render::{ControlPoint, RenderBinding};

#[derive(Default)]
pub struct PlotScene {
    pub line: Vec<[f64; 2]>,
    pub start_point: [f64; 2],
    pub end_point: [f64; 2],
    pub equation: String,
    pub error_width: f64,
    pub error_scale: f64,
    ctx: Option<egui::Context>,
}

impl PlotScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repaint requests go to `ctx` from now on.
    pub fn attach(&mut self, ctx: egui::Context) {
        self.ctx = Some(ctx);
    }
}

impl RenderBinding for PlotScene {
    fn set_line(&mut self, points: &[[f64; 2]]) {
        self.line.clear();
        self.line.extend_from_slice(points);
    }

    fn set_control_point(&mut self, which: ControlPoint, position: [f64; 2]) {
        match which {
            ControlPoint::Start => self.start_point = position,
            ControlPoint::End => self.end_point = position,
        }
    }

    fn set_equation_text(&mut self, text: &str) {
        self.equation.clear();
        self.equation.push_str(text);
    }

    fn set_error_bar_width(&mut self, value: f64) {
        self.error_width = value;
    }

    fn set_error_bar_scale(&mut self, max: f64) {
        self.error_scale = max;
    }

    fn request_redraw(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}
