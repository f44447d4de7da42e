use egui::Ui;

use super::panel_trait::{Panel, PanelState, SceneController};
use crate::config::SliderRange;
use crate::data::interaction::{GestureEvent, InteractionMode};

/// Slope and intercept sliders for declarative mode.
pub struct SlidersPanel {
    state: PanelState,
    slope: SliderRange,
    intercept: SliderRange,
}

impl SlidersPanel {
    pub fn new(slope: SliderRange, intercept: SliderRange) -> Self {
        Self {
            state: PanelState::new("Parameters"),
            slope,
            intercept,
        }
    }
}

impl Panel for SlidersPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn show(&mut self, ui: &mut Ui, controller: &mut SceneController) -> bool {
        ui.heading(self.title());
        let enabled = controller.mode() == InteractionMode::DeclarativeControl;
        let current = controller.parameters();
        let (mut slope, mut intercept) = (current.slope, current.intercept);

        let mut touched = false;
        ui.add_enabled_ui(enabled, |ui| {
            touched |= ui
                .add(
                    egui::Slider::new(&mut slope, self.slope.range())
                        .step_by(self.slope.step)
                        .text("Slope"),
                )
                .changed();
            touched |= ui
                .add(
                    egui::Slider::new(&mut intercept, self.intercept.range())
                        .step_by(self.intercept.step)
                        .text("Y-Intercept"),
                )
                .changed();
        });
        if !enabled {
            ui.small("Switch to slider mode to edit.");
        }

        touched && controller.handle(GestureEvent::ParametersSet { slope, intercept })
    }
}
