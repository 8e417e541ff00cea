//! Event handling for VoyageApp.
//!
//! Contains handlers for:
//! - Raw input translation (egui events -> RawNavEvent -> unifier -> director)
//! - Event bus draining (dot clicks, transition sync, hint dismissal)

use std::time::Instant;

use eframe::egui::{self, Key, Modifiers, TouchPhase};
use log::trace;

use super::VoyageApp;
use crate::core::director::TransitionStartedEvent;
use crate::core::event_bus::{downcast_event, Event};
use crate::core::input::{NavKey, RawNavEvent};
use crate::widgets::{HintDismissedEvent, NavRequestEvent};

/// Fixed key table: window key -> unifier key.
const KEY_TABLE: [(Key, NavKey); 7] = [
    (Key::ArrowDown, NavKey::ArrowDown),
    (Key::PageDown, NavKey::PageDown),
    (Key::Space, NavKey::Space),
    (Key::ArrowUp, NavKey::ArrowUp),
    (Key::PageUp, NavKey::PageUp),
    (Key::Home, NavKey::Home),
    (Key::End, NavKey::End),
];

impl VoyageApp {
    /// Translate this frame's egui input into raw nav events, feed the
    /// unifier, and hand accepted intents to the director.
    pub fn handle_raw_input(&mut self, ctx: &egui::Context, now: Instant) {
        let mut raws: Vec<(RawNavEvent, Option<Key>)> = Vec::new();

        ctx.input(|input| {
            // egui scroll delta is content motion (scroll down = negative y);
            // the unifier wants "down = advance = positive".
            let dy = input.raw_scroll_delta.y;
            if dy != 0.0 {
                raws.push((RawNavEvent::Wheel { delta_y: -dy }, None));
            }

            for event in &input.events {
                if let egui::Event::Touch { phase, pos, .. } = event {
                    match phase {
                        TouchPhase::Start => {
                            raws.push((RawNavEvent::TouchStart { y: pos.y }, None))
                        }
                        TouchPhase::End => raws.push((RawNavEvent::TouchEnd { y: pos.y }, None)),
                        _ => {}
                    }
                }
            }

            for (key, nav) in KEY_TABLE {
                if input.key_pressed(key) {
                    raws.push((RawNavEvent::Key(nav), Some(key)));
                }
            }
        });

        for (raw, key) in raws {
            // First wheel interaction retires the scroll hint
            if matches!(raw, RawNavEvent::Wheel { .. }) && self.hud.hint_showing() {
                self.hud.dismiss_hint(now);
            }

            let unified = self.unifier.handle(raw, now, self.director.gate());
            if unified.consume {
                if let Some(key) = key {
                    // preventDefault analogue: eat the key before egui's own
                    // focus/scroll handling sees it
                    ctx.input_mut(|i| i.consume_key(Modifiers::NONE, key));
                }
            }
            if let Some(intent) = unified.intent {
                self.director.apply(intent, now, &mut self.stage);
            }
        }

        // Window chrome
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.exit_requested = true;
        }
        if ctx.input(|i| i.key_pressed(Key::F11)) {
            self.is_fullscreen = !self.is_fullscreen;
            self.fullscreen_dirty = true;
        }
    }

    /// Drain the event bus once per frame.
    pub fn handle_events(&mut self, now: Instant) {
        // Dot clicks: last one this frame wins
        let mut nav_request: Option<usize> = None;

        for event in self.event_bus.poll() {
            if let Some(e) = downcast_event::<NavRequestEvent>(&event) {
                nav_request = Some(e.0);
                continue;
            }
            if let Some(e) = downcast_event::<TransitionStartedEvent>(&event) {
                // Indicator feedback reflects intent, not visual arrival
                self.hud.set_active_dot(e.to);
                self.hud.set_progress(e.to, now);
                continue;
            }
            if downcast_event::<HintDismissedEvent>(&event).is_some() {
                self.settings.show_hint = false;
                continue;
            }
            trace!("unhandled event: {}", (*event).type_name());
        }

        if let Some(target) = nav_request {
            // The director owns every rejection rule for out-of-turn jumps
            if self.director.go_to(target, now, &mut self.stage) {
                self.hud.set_active_dot(target);
                self.hud.set_progress(target, now);
            }
        }
    }
}
