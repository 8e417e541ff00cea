//! Application module - VoyageApp and related functionality.
//!
//! This module organizes the main application logic into focused submodules:
//! - `events` - event bus draining and raw input translation
//! - `run` - the eframe::App implementation (per-frame update)

mod events;
mod run;

use std::time::Instant;

use crate::cli::Args;
use crate::core::director::SceneDirector;
use crate::core::event_bus::EventBus;
use crate::core::input::InputUnifier;
use crate::paths::PathConfig;
use crate::scene::Stage;
use crate::settings::Settings;
use crate::widgets::Hud;

/// Main application state.
///
/// Owns the single [`Stage`] instance plus the controller pieces around it:
/// director (index + lock), input unifier, hud, event bus, settings. The
/// director and unifier never own the stage - they receive it by reference
/// each frame.
pub struct VoyageApp {
    pub stage: Stage,
    pub director: SceneDirector,
    pub unifier: InputUnifier,
    pub hud: Hud,
    pub settings: Settings,
    pub event_bus: EventBus,
    pub path_config: PathConfig,
    /// App start; drives idle scene motion at paint time.
    pub started: Instant,
    pub is_fullscreen: bool,
    /// Apply `is_fullscreen` via viewport command on the next frame.
    pub fullscreen_dirty: bool,
    pub exit_requested: bool,
}

impl VoyageApp {
    pub fn new(args: &Args, path_config: PathConfig) -> Self {
        let settings = Settings::load(&path_config);
        let now = Instant::now();

        let seed = args.seed.unwrap_or(settings.seed);
        let mut stage = Stage::build(seed);

        let event_bus = EventBus::new();
        let mut director = SceneDirector::new(stage.len()).with_emitter(event_bus.emitter());
        let unifier = InputUnifier::new(stage.len())
            .with_wheel_deadtime(std::time::Duration::from_millis(settings.wheel_deadtime_ms))
            .with_swipe_threshold(settings.swipe_threshold);
        let mut hud = Hud::new(stage.len(), event_bus.emitter(), settings.show_hint, now);

        // --scene N: start elsewhere, without an animated transition
        let start = args.scene.min(stage.len() - 1);
        if director.snap_to(start, &mut stage) {
            hud.set_active_dot(start);
            hud.set_progress(start, now);
        }

        Self {
            stage,
            director,
            unifier,
            hud,
            settings,
            event_bus,
            path_config,
            started: now,
            is_fullscreen: args.fullscreen,
            fullscreen_dirty: args.fullscreen,
            exit_requested: false,
        }
    }

    /// Seconds since app start.
    pub fn elapsed(&self, now: Instant) -> f32 {
        now.duration_since(self.started).as_secs_f32()
    }
}
