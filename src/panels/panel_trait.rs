use egui::Ui;

use crate::app::scene::PlotScene;
use crate::data::interaction::InteractionController;

/// Controller type every panel operates on.
pub type SceneController = InteractionController<PlotScene>;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
}

impl PanelState {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    /// Draw the panel; returns `true` when it changed the parameters.
    fn show(&mut self, ui: &mut Ui, controller: &mut SceneController) -> bool;
}
