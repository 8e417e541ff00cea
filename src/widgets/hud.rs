//! Heads-up navigation: indicator dots, progress fill, scroll hint.
//!
//! Indicator state reflects intent, not visual arrival - the app syncs it
//! the moment a transition is accepted. The progress fill runs its own short
//! tween, fully independent of the main transition timeline: it is cosmetic
//! and never blocks (or is blocked by) the lock.
//!
//! Dots don't navigate directly; a click emits [`NavRequestEvent`] on the
//! bus and the app routes it to `SceneDirector::go_to`, which owns all
//! rejection rules.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};
use log::trace;

use crate::core::event_bus::EventEmitter;
use crate::core::timeline::{schedule, Ease, Tween};

/// Emitted when an indicator dot is clicked.
#[derive(Clone, Copy, Debug)]
pub struct NavRequestEvent(pub usize);

/// Emitted once, when the scroll hint starts fading out.
#[derive(Clone, Copy, Debug)]
pub struct HintDismissedEvent;

const ACCENT: Color32 = Color32::from_rgb(0xff, 0x3c, 0x00);
const INK: Color32 = Color32::from_rgb(0xf2, 0xf2, 0xf2);

const DOT_SPACING: f32 = 22.0;
const DOT_RADIUS: f32 = 4.0;
const HINT_FADE_SECS: f32 = 0.3;

#[derive(Clone, Debug)]
enum HintState {
    Shown,
    Fading(Tween),
    Gone,
}

/// Dots + progress + hint state, owned by the app.
#[derive(Clone, Debug)]
pub struct Hud {
    scene_count: usize,
    active_dot: usize,
    progress: Tween,
    hint: HintState,
    emitter: EventEmitter,
}

impl Hud {
    pub fn new(scene_count: usize, emitter: EventEmitter, show_hint: bool, now: Instant) -> Self {
        Self {
            scene_count,
            active_dot: 0,
            progress: Tween::new(0.0, 0.0, now)
                .duration(schedule::PROGRESS_SECS)
                .ease(Ease::QuartOut),
            hint: if show_hint {
                HintState::Shown
            } else {
                HintState::Gone
            },
            emitter,
        }
    }

    /// Mark exactly one dot active.
    pub fn set_active_dot(&mut self, index: usize) {
        self.active_dot = index.min(self.scene_count - 1);
    }

    pub fn active_dot(&self) -> usize {
        self.active_dot
    }

    /// Retarget the fill tween to `index / (N-1)`.
    pub fn set_progress(&mut self, index: usize, now: Instant) {
        let fraction = index as f32 / (self.scene_count - 1).max(1) as f32;
        self.progress.retarget(fraction, now);
    }

    pub fn progress_at(&self, now: Instant) -> f32 {
        self.progress.value_at(now)
    }

    /// Fade the scroll hint out on first interaction. Idempotent.
    pub fn dismiss_hint(&mut self, now: Instant) {
        if matches!(self.hint, HintState::Shown) {
            trace!("scroll hint dismissed");
            self.hint = HintState::Fading(
                Tween::new(1.0, 0.0, now).duration(HINT_FADE_SECS),
            );
            self.emitter.emit(HintDismissedEvent);
        }
    }

    pub fn hint_showing(&self) -> bool {
        !matches!(self.hint, HintState::Gone)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, now: Instant) {
        let rect = ui.max_rect();
        self.dots_ui(ui, rect);
        self.progress_ui(ui, rect, now);
        self.hint_ui(ui, rect, now);
    }

    fn dots_ui(&self, ui: &mut egui::Ui, rect: Rect) {
        let x = rect.right() - 28.0;
        let y0 = rect.center().y - DOT_SPACING * (self.scene_count - 1) as f32 / 2.0;

        for i in 0..self.scene_count {
            let center = Pos2::new(x, y0 + i as f32 * DOT_SPACING);
            let hit = Rect::from_center_size(center, egui::vec2(16.0, 16.0));
            let response = ui.interact(hit, ui.id().with(("scene_dot", i)), Sense::click());
            if response.clicked() {
                self.emitter.emit(NavRequestEvent(i));
            }

            let painter = ui.painter();
            if i == self.active_dot {
                painter.circle_filled(center, DOT_RADIUS + 1.0, ACCENT);
                painter.circle_stroke(center, DOT_RADIUS + 4.0, Stroke::new(1.0, ACCENT.gamma_multiply(0.5)));
            } else {
                let alpha = if response.hovered() { 0.7 } else { 0.25 };
                painter.circle_filled(center, DOT_RADIUS, INK.gamma_multiply(alpha));
            }
        }
    }

    fn progress_ui(&self, ui: &egui::Ui, rect: Rect, now: Instant) {
        let fill = self.progress.value_at(now).clamp(0.0, 1.0);
        if fill <= 0.0 {
            return;
        }
        ui.painter().rect_filled(
            Rect::from_min_max(
                Pos2::new(rect.left(), rect.bottom() - 3.0),
                Pos2::new(rect.left() + rect.width() * fill, rect.bottom()),
            ),
            0.0,
            ACCENT,
        );
    }

    fn hint_ui(&mut self, ui: &egui::Ui, rect: Rect, now: Instant) {
        let (alpha, faded_out) = match &self.hint {
            HintState::Shown => (1.0, false),
            HintState::Fading(tween) => (tween.value_at(now), tween.finished(now)),
            HintState::Gone => return,
        };
        if faded_out {
            self.hint = HintState::Gone;
            return;
        }
        ui.painter().text(
            Pos2::new(rect.center().x, rect.bottom() - 24.0),
            Align2::CENTER_BOTTOM,
            "SCROLL TO EXPLORE",
            FontId::monospace(12.0),
            INK.gamma_multiply(alpha * 0.7),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::{downcast_event, EventBus};
    use std::time::Duration;

    #[test]
    fn test_progress_retargets_to_fraction() {
        let bus = EventBus::new();
        let t0 = Instant::now();
        let mut hud = Hud::new(14, bus.emitter(), true, t0);

        hud.set_progress(13, t0);
        assert!((hud.progress_at(t0 + Duration::from_secs(1)) - 1.0).abs() < 1e-6);

        hud.set_progress(0, t0 + Duration::from_secs(1));
        assert!(hud.progress_at(t0 + Duration::from_secs(2)).abs() < 1e-6);
    }

    #[test]
    fn test_hint_dismissal_is_once() {
        let bus = EventBus::new();
        let t0 = Instant::now();
        let mut hud = Hud::new(14, bus.emitter(), true, t0);
        assert!(hud.hint_showing());

        hud.dismiss_hint(t0);
        hud.dismiss_hint(t0 + Duration::from_millis(50));

        let events = bus.poll();
        let count = events
            .iter()
            .filter(|e| downcast_event::<HintDismissedEvent>(e).is_some())
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_active_dot_clamped() {
        let bus = EventBus::new();
        let mut hud = Hud::new(14, bus.emitter(), false, Instant::now());
        assert!(!hud.hint_showing());
        hud.set_active_dot(99);
        assert_eq!(hud.active_dot(), 13);
    }
}
