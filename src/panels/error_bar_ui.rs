use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotBounds};

use super::panel_trait::{Panel, PanelState, SceneController};

/// Horizontal bar showing the total squared error.
pub struct ErrorBarPanel {
    state: PanelState,
    height: f32,
}

impl Default for ErrorBarPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Total Error"),
            height: 120.0,
        }
    }
}

impl Panel for ErrorBarPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn show(&mut self, ui: &mut Ui, controller: &mut SceneController) -> bool {
        let scene = controller.binding();
        let (width, scale) = (scene.error_width, scene.error_scale);

        ui.horizontal(|ui| {
            ui.strong(self.title());
            ui.label(format!("{:.2}", width));
        });

        let bar = Bar::new(0.0, width).width(0.5).fill(Color32::GREEN);
        let chart = BarChart::new("Total Error", vec![bar])
            .horizontal()
            .color(Color32::GREEN);
        Plot::new("error_bar")
            .height(self.height)
            .show_axes([true, false])
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, -0.5], [scale, 0.5]));
                plot_ui.bar_chart(chart);
            });
        false
    }
}
