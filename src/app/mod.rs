//! Standalone playground window.
//!
//! [`RegressionApp`] owns the single [`InteractionController`] and implements
//! [`eframe::App`]. Each frame it:
//!
//! 1. Drains requests from the optional [`ParametersController`].
//! 2. Handles hotkeys (reset, mode toggle, screenshot).
//! 3. Draws the panels, which feed pointer and slider input to the controller.
//! 4. Publishes the new parameters if anything changed.

pub mod run;
pub mod scene;

use eframe::egui;
use egui::ViewportCommand;
use image::{Rgba, RgbaImage};

use crate::config::{FeatureFlags, RegressionConfig};
use crate::controllers::{ParametersController, ParametersRequest, ParametersUpdate};
use crate::data::dataset::Sample;
use crate::data::hotkeys::{format_button_tooltip, HotkeyName, Hotkeys};
use crate::data::interaction::{GestureEvent, InteractionController, InteractionMode};
use crate::error::RegressionError;
use crate::panels::{ErrorBarPanel, Panel, PlotPanel, SceneController, SlidersPanel};

pub use run::run_playground;
pub use scene::PlotScene;

pub struct RegressionApp {
    controller: SceneController,
    plot_panel: PlotPanel,
    error_panel: ErrorBarPanel,
    sliders_panel: SlidersPanel,
    features: FeatureFlags,
    hotkeys: Hotkeys,
    parameters_ctrl: Option<ParametersController>,
    request_window_shot: bool,
}

impl RegressionApp {
    /// Generate the dataset and build the controller described by `cfg`.
    pub fn new(cfg: &RegressionConfig) -> Result<Self, RegressionError> {
        let sample = Sample::generate(&cfg.dataset)?;
        let mut controller =
            InteractionController::new(sample, cfg.interaction_settings(), PlotScene::new());
        controller.render_initial();

        let app = Self {
            controller,
            plot_panel: PlotPanel::new(cfg.features.clone()),
            error_panel: ErrorBarPanel::default(),
            sliders_panel: SlidersPanel::new(cfg.slope, cfg.intercept),
            features: cfg.features.clone(),
            hotkeys: cfg.hotkeys.clone(),
            parameters_ctrl: cfg.parameters_controller.clone(),
            request_window_shot: false,
        };
        app.publish();
        Ok(app)
    }

    pub fn controller(&self) -> &SceneController {
        &self.controller
    }

    pub(crate) fn attach_context(&mut self, ctx: egui::Context) {
        self.controller.binding_mut().attach(ctx);
    }

    fn publish(&self) {
        if let Some(ctrl) = &self.parameters_ctrl {
            let view = self.controller.view();
            ctrl.publish(ParametersUpdate {
                parameters: view.parameters,
                total_error: view.total_error,
            });
        }
    }

    /// Feed pending [`ParametersController`] requests to the interaction
    /// controller. Returns `true` when anything changed.
    pub fn apply_controllers(&mut self) -> bool {
        let Some(ctrl) = &self.parameters_ctrl else {
            return false;
        };
        let mut changed = false;
        for request in ctrl.drain_requests() {
            match request {
                ParametersRequest::Set(p) => {
                    changed |= self.controller.handle(GestureEvent::ParametersSet {
                        slope: p.slope,
                        intercept: p.intercept,
                    });
                }
                ParametersRequest::Reset => {
                    self.controller.reset();
                    changed = true;
                }
            }
        }
        changed
    }

    fn toggle_mode(&mut self) {
        if self.features.mode_switch {
            let next = self.controller.mode().toggled();
            self.controller.set_mode(next);
        }
    }

    fn apply_hotkeys(&mut self, ctx: &egui::Context) -> bool {
        // Sliders own keyboard focus while being edited.
        if ctx.wants_keyboard_input() {
            return false;
        }
        let pressed = ctx.input(|i| self.hotkeys.pressed(i));
        let mut changed = false;
        for name in pressed {
            match name {
                HotkeyName::Reset => {
                    self.controller.reset();
                    changed = true;
                }
                HotkeyName::ToggleMode => self.toggle_mode(),
                HotkeyName::SavePng => self.request_window_shot = true,
            }
        }
        changed
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.heading(self.plot_panel.title());
            ui.separator();
            if self.features.mode_switch {
                let mode = self.controller.mode();
                let label = match mode {
                    InteractionMode::DirectManipulation => {
                        format!("{} {}", egui_phosphor::regular::HAND_GRABBING, mode.label())
                    }
                    InteractionMode::DeclarativeControl => {
                        format!("{} {}", egui_phosphor::regular::SLIDERS, mode.label())
                    }
                };
                let tip = format_button_tooltip(
                    "Switch between dragging and sliders",
                    self.hotkeys.get(HotkeyName::ToggleMode),
                );
                if ui.button(label).on_hover_text(tip).clicked() {
                    self.toggle_mode();
                }
            }
            let tip = format_button_tooltip("Reset", self.hotkeys.get(HotkeyName::Reset));
            let reset = format!("{} Reset", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE);
            if ui.button(reset).on_hover_text(tip).clicked() {
                self.controller.reset();
                changed = true;
            }
            let tip = format_button_tooltip(
                "Take a viewport screenshot",
                self.hotkeys.get(HotkeyName::SavePng),
            );
            let shot = format!("{} Save PNG", egui_phosphor::regular::CAMERA);
            if ui.button(shot).on_hover_text(tip).clicked() {
                self.request_window_shot = true;
            }
        });
        changed
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(Default::default()));
        }

        let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        }) else {
            return;
        };

        let default_name = format!("regression_{}.png", chrono::Local::now().timestamp_millis());
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .save_file()
        else {
            return;
        };
        let egui::ColorImage {
            size: [w, h],
            pixels,
            ..
        } = &*image_arc;
        let mut out = RgbaImage::new(*w as u32, *h as u32);
        for y in 0..*h {
            for x in 0..*w {
                let p = pixels[y * *w + x];
                out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
            }
        }
        match out.save(&path) {
            Ok(()) => log::info!("saved viewport screenshot to {:?}", path),
            Err(e) => log::warn!("failed to save viewport screenshot: {e}"),
        }
    }
}

impl eframe::App for RegressionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = self.apply_controllers();
        changed |= self.apply_hotkeys(ctx);

        if self.features.top_bar {
            egui::TopBottomPanel::top("controls").show(ctx, |ui| {
                changed |= self.top_bar(ui);
            });
        }

        if self.controller.mode() == InteractionMode::DeclarativeControl {
            egui::SidePanel::left("sliders")
                .resizable(false)
                .show(ctx, |ui| {
                    changed |= self.sliders_panel.show(ui, &mut self.controller);
                });
        }

        egui::TopBottomPanel::bottom("error_bar")
            .resizable(false)
            .show(ctx, |ui| {
                changed |= self.error_panel.show(ui, &mut self.controller);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            changed |= self.plot_panel.show(ui, &mut self.controller);
        });

        if changed {
            self.publish();
        }

        self.handle_screenshot(ctx);
    }
}
