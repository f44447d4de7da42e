use egui::{Color32, CursorIcon, Pos2, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotTransform, Points, Text};

use super::panel_trait::{Panel, PanelState, SceneController};
use crate::config::FeatureFlags;
use crate::data::interaction::{GestureEvent, InteractionMode, PlotScale};

const EQUATION_COLOR: Color32 = Color32::from_rgb(128, 0, 128);

/// Scatter, regression line, control points and equation label.
///
/// Translates egui pointer input into [`GestureEvent`]s in data space.
pub struct PlotPanel {
    state: PanelState,
    features: FeatureFlags,
}

impl PlotPanel {
    pub fn new(features: FeatureFlags) -> Self {
        Self {
            state: PanelState::new("Interactive Linear Regression"),
            features,
        }
    }
}

impl Panel for PlotPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn show(&mut self, ui: &mut Ui, controller: &mut SceneController) -> bool {
        let sample = controller.sample();
        let (x_min, x_max) = (sample.x_min(), sample.x_max());
        let (y_lo, y_hi) = sample.y_range();
        let data_points = sample.points();
        let scene = controller.binding();

        let mut plot = Plot::new("regression_plot")
            .show_grid(self.features.grid)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .default_x_bounds(x_min, x_max)
            .default_y_bounds(y_lo - 5.0, y_hi + 5.0)
            .x_axis_label("x")
            .y_axis_label("y");
        if self.features.legend {
            plot = plot.legend(Legend::default());
        }

        let base_body = ui.style().text_styles[&egui::TextStyle::Body].size;
        let equation = RichText::new(scene.equation.clone())
            .size(base_body * 1.3)
            .color(EQUATION_COLOR);
        let label_pos = PlotPoint::new(x_min + 0.25 * (x_max - x_min), y_hi + 2.0);

        let plot_response = plot.show(ui, |plot_ui| {
            plot_ui.points(
                Points::new("Data Points", data_points)
                    .radius(3.0)
                    .color(Color32::LIGHT_BLUE),
            );
            plot_ui.line(
                Line::new("Regression Line", scene.line.clone())
                    .color(Color32::RED)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new("Control Point Start", vec![scene.start_point])
                    .radius(6.0)
                    .color(Color32::GREEN),
            );
            plot_ui.points(
                Points::new("Control Point End", vec![scene.end_point])
                    .radius(6.0)
                    .color(Color32::ORANGE),
            );
            plot_ui.text(Text::new("equation", label_pos, equation));
        });

        if controller.mode() != InteractionMode::DirectManipulation {
            return false;
        }

        let transform = plot_response.transform;
        let [dx, dy] = transform.dvalue_dpos();
        controller.set_plot_scale(PlotScale {
            x_per_unit: dx.abs(),
            y_per_unit: dy.abs(),
        });

        let (pressed, released, moving, latest) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });
        let data_pos = latest.and_then(|p| to_data(&transform, p));

        let mut changed = false;
        if pressed && plot_response.response.hovered() {
            changed |= controller.handle(GestureEvent::PointerDown(data_pos));
        }
        if moving && controller.drag_state().is_dragging() {
            changed |= controller.handle(GestureEvent::PointerMove(data_pos));
        }
        if released {
            changed |= controller.handle(GestureEvent::PointerUp);
        }

        if controller.drag_state().is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if plot_response.response.hovered()
            && data_pos.is_some_and(|p| controller.hit_test(p).is_some())
        {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }
        changed
    }
}

// Pointer positions outside the plot frame have no data coordinate.
fn to_data(transform: &PlotTransform, pos: Pos2) -> Option<[f64; 2]> {
    if !transform.frame().contains(pos) {
        return None;
    }
    let v = transform.value_from_position(pos);
    Some([v.x, v.y])
}
