pub mod error_bar_ui;
pub mod panel_trait;
pub mod plot_ui;
pub mod sliders_ui;

pub use error_bar_ui::ErrorBarPanel;
pub use panel_trait::{Panel, PanelState, SceneController};
pub use plot_ui::PlotPanel;
pub use sliders_ui::SlidersPanel;
