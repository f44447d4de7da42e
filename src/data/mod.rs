pub mod dataset;
pub mod hotkeys;
pub mod interaction;
pub mod model;
pub mod view;
