//! Entry point for running the playground as a native window.

use eframe::egui;

use super::RegressionApp;
use crate::config::RegressionConfig;
use crate::error::AppError;

/// Launch the playground in a native window.
///
/// Builds the seeded dataset and the interaction controller from `cfg`,
/// opens the window and blocks until it is closed.
pub fn run_playground(mut cfg: RegressionConfig) -> Result<(), AppError> {
    let mut app = RegressionApp::new(&cfg)?;
    log::info!(
        "starting '{}' in {:?} mode with {} points",
        cfg.title,
        cfg.mode,
        cfg.dataset.n
    );

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(900.0, 900.0));
    }

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            app.attach_context(cc.egui_ctx.clone());
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
