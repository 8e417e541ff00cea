//! Main application loop - eframe::App implementation.
//!
//! Per-frame flow:
//! 1. Raw input -> unifier -> director (guarded intents)
//! 2. Advance the in-flight transition timeline
//! 3. Drain the event bus (dot clicks, indicator sync)
//! 4. Paint viewport, cards, hud
//!
//! Repaint is requested every frame - idle scene motion never stops.

use std::time::Instant;

use eframe::egui;
use log::{info, warn};

use super::VoyageApp;
use crate::widgets::{cards, viewport};

impl eframe::App for VoyageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        let now = Instant::now();

        // Apply pending fullscreen changes (CLI flag or F11)
        if self.fullscreen_dirty {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.is_fullscreen));
            self.fullscreen_dirty = false;
        }

        ctx.set_visuals(egui::Visuals::dark());

        self.handle_raw_input(ctx, now);
        self.director.update(now, &mut self.stage);
        self.handle_events(now);

        let time = self.elapsed(now);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                viewport::ui(ui, &self.stage, time);
                cards::ui(ui, &self.stage);
                self.hud.ui(ui, now);
            });

        ctx.request_repaint();
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::BLACK.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings.save(&self.path_config) {
            warn!("Failed to save settings: {e:#}");
        }
        info!(
            "Voyage shut down at scene {}",
            self.director.current_scene()
        );
    }
}
