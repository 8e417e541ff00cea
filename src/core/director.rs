//! Transition state machine - owns the current index and the lock.
//!
//! **Architecture**: SceneDirector does NOT own the Stage. It receives
//! `&mut Stage` when a method needs to drive visuals (the app owns the
//! single Stage instance).
//!
//! **Why**: the presentation must behave as one visual transaction per
//! navigation: at most one transition in flight, all sub-animations issued
//! in the same synchronous step, index/indicator feedback immediate, lock
//! released only by the timeline join (or its fallback deadline).
//!
//! **Used by**: app frame loop (`update`), intent handling (`apply`), dot
//! navigation (`go_to` - the externally callable entry point).
//!
//! # Lock discipline
//!
//! `go_to` rejects while a transition is in flight; intents arriving during
//! that window are dropped, never queued. There is no mid-transition
//! cancellation - residual tracks left by a fallback release are snapped to
//! their end values before the next transition starts.

use std::time::Instant;

use log::{debug, trace};

use crate::core::event_bus::EventEmitter;
use crate::core::input::{NavGate, NavIntent};
use crate::core::timeline::{schedule, TrackTarget, TransitionTimeline};
use crate::scene::camera::Camera;
use crate::scene::Stage;

/// Emitted when a transition is accepted, in the same step that schedules
/// its tracks. Indicator sync listens for this.
#[derive(Clone, Copy, Debug)]
pub struct TransitionStartedEvent {
    pub from: usize,
    pub to: usize,
}

/// Emitted when the lock releases (join completed or fallback deadline).
#[derive(Clone, Copy, Debug)]
pub struct TransitionFinishedEvent {
    pub from: usize,
    pub to: usize,
}

/// The one writer of navigation state.
#[derive(Clone, Debug)]
pub struct SceneDirector {
    current: usize,
    scene_count: usize,
    /// Live track set; may outlive the lock briefly after a fallback release.
    timeline: Option<TransitionTimeline>,
    locked: bool,
    emitter: Option<EventEmitter>,
}

impl SceneDirector {
    pub fn new(scene_count: usize) -> Self {
        assert!(scene_count > 0, "empty scene roster");
        Self {
            current: 0,
            scene_count,
            timeline: None,
            locked: false,
            emitter: None,
        }
    }

    pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn current_scene(&self) -> usize {
        self.current
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Snapshot for the input unifier and indicator rendering.
    pub fn gate(&self) -> NavGate {
        NavGate {
            current: self.current,
            locked: self.locked,
        }
    }

    /// Feed one unified intent through the guard.
    pub fn apply(&mut self, intent: NavIntent, now: Instant, stage: &mut Stage) -> bool {
        match intent {
            NavIntent::Advance(step) => {
                let target = self.current as i32 + step;
                if target < 0 || target >= self.scene_count as i32 {
                    trace!("advance past roster edge dropped");
                    return false;
                }
                self.go_to(target as usize, now, stage)
            }
            NavIntent::JumpTo(index) => self.go_to(index, now, stage),
        }
    }

    /// Start a transition to `target`. The externally callable navigation
    /// entry point (dot clicks land here).
    ///
    /// No-op while locked, for the current index, or out of range. On
    /// acceptance: schedules all sub-animations in this synchronous step,
    /// flips the incoming scene visible, and updates `current` immediately -
    /// indicator feedback reflects intent, not visual arrival.
    pub fn go_to(&mut self, target: usize, now: Instant, stage: &mut Stage) -> bool {
        if self.locked || target == self.current || target >= self.scene_count {
            trace!(
                "go_to({target}) rejected (current {}, locked {})",
                self.current, self.locked
            );
            return false;
        }

        // A fallback-released timeline may still hold residual tracks;
        // run them to completion instantly before the new transaction.
        if let Some(mut residual) = self.timeline.take() {
            for (track, value) in residual.finish_remaining() {
                Self::apply_track(stage, track, value);
                Self::complete_track(stage, track);
            }
        }

        let from = self.current;
        let camera_to = Camera::rest_z(stage.scenes[target].depth);
        let timeline = TransitionTimeline::new(
            from,
            target,
            stage.camera.position.z,
            camera_to,
            stage.has_card(target),
            now,
        );

        // Incoming content renders immediately; its opacity ramps in later.
        stage.set_scene_visible(target, true);
        if let Some(card) = &mut stage.scenes[target].card {
            card.visible = true;
            card.opacity = 0.0;
            card.offset_y = schedule::CARD_SLIDE;
        }

        self.current = target;
        self.locked = true;
        self.timeline = Some(timeline);

        debug!("transition {from} -> {target}");
        self.emit(TransitionStartedEvent { from, to: target });
        true
    }

    /// Jump to `target` with no animation. Startup only (`--scene` flag):
    /// swaps visibility, opacity, card and camera in one step, never locks.
    pub fn snap_to(&mut self, target: usize, stage: &mut Stage) -> bool {
        if self.locked || target == self.current || target >= self.scene_count {
            return false;
        }
        let from = self.current;
        stage.set_scene_visible(from, false);
        stage.set_scene_opacity(from, 0.0);
        if let Some(card) = &mut stage.scenes[from].card {
            card.visible = false;
            card.opacity = 0.0;
        }
        stage.set_scene_visible(target, true);
        stage.set_scene_opacity(target, 1.0);
        if let Some(card) = &mut stage.scenes[target].card {
            card.visible = true;
            card.opacity = 1.0;
            card.offset_y = 0.0;
        }
        stage.camera.position.z = Camera::rest_z(stage.scenes[target].depth);
        self.current = target;
        debug!("snapped to scene {target}");
        true
    }

    /// Advance the in-flight transition. Called once per frame.
    pub fn update(&mut self, now: Instant, stage: &mut Stage) {
        let Some(timeline) = &mut self.timeline else {
            return;
        };

        for track in timeline.tracks_mut() {
            Self::apply_track(stage, track.target, track.tween.value_at(now));
            if !track.completed && track.tween.finished(now) {
                track.completed = true;
                Self::complete_track(stage, track.target);
            }
        }

        let release = self.locked && timeline.finished(now);
        let (from, to) = (timeline.from, timeline.to);
        let drained = timeline.tracks().iter().all(|t| t.completed);

        // Drop the timeline once every completion action has fired
        if drained {
            self.timeline = None;
        }
        if release {
            self.locked = false;
            debug!("transition {from} -> {to} complete, lock released");
            self.emit(TransitionFinishedEvent { from, to });
        }
    }

    fn apply_track(stage: &mut Stage, target: TrackTarget, value: f32) {
        match target {
            TrackTarget::CameraDepth => stage.camera.position.z = value,
            TrackTarget::SceneFade { index, .. } => stage.set_scene_opacity(index, value),
            TrackTarget::CardFade { index, slide, .. } => {
                if let Some(card) = &mut stage.scenes[index].card {
                    card.opacity = value;
                    card.offset_y = (1.0 - value) * slide;
                }
            }
        }
    }

    fn complete_track(stage: &mut Stage, target: TrackTarget) {
        match target {
            TrackTarget::SceneFade {
                index,
                hide_on_done: true,
            } => stage.set_scene_visible(index, false),
            TrackTarget::CardFade {
                index,
                hide_on_done: true,
                ..
            } => {
                if let Some(card) = &mut stage.scenes[index].card {
                    card.visible = false;
                }
            }
            _ => {}
        }
    }

    fn emit<E: crate::core::event_bus::Event + Clone>(&self, event: E) {
        if let Some(emitter) = &self.emitter {
            emitter.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::{downcast_event, EventBus};
    use std::time::Duration;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    fn setup() -> (SceneDirector, Stage) {
        let stage = Stage::build(1);
        let director = SceneDirector::new(stage.len());
        (director, stage)
    }

    #[test]
    fn test_go_to_runs_one_full_transaction() {
        let (mut director, mut stage) = setup();
        let t0 = Instant::now();

        assert!(director.go_to(1, t0, &mut stage));
        // Index and lock flip immediately
        assert_eq!(director.current_scene(), 1);
        assert!(director.is_locked());
        // Incoming content renders from the start
        assert!(stage.scenes[1].root_group().visible);
        assert!(stage.scenes[1].card.unwrap().visible);

        // Mid-flight: both scenes rendering, camera en route
        director.update(t0 + secs(0.3), &mut stage);
        assert!(director.is_locked());
        assert!(stage.scenes[0].root_group().visible);
        let z = stage.camera.position.z;
        assert!(z < Camera::rest_z(0.0) && z > Camera::rest_z(-25.0));

        // Past the longest duration: lock released, outgoing retired
        director.update(t0 + secs(0.61), &mut stage);
        assert!(!director.is_locked());
        assert_eq!(director.current_scene(), 1);
        assert!(!stage.scenes[0].root_group().visible);
        assert!(!stage.scenes[0].card.unwrap().visible);
        let card = stage.scenes[1].card.unwrap();
        assert!((card.opacity - 1.0).abs() < 1e-6);
        assert_eq!(card.offset_y, 0.0);
        assert_eq!(stage.camera.position.z, Camera::rest_z(-25.0));
    }

    #[test]
    fn test_second_go_to_rejected_while_locked() {
        let (mut director, mut stage) = setup();
        let t0 = Instant::now();

        assert!(director.go_to(1, t0, &mut stage));
        assert!(!director.go_to(2, t0 + secs(0.1), &mut stage));
        assert!(!director.go_to(0, t0 + secs(0.1), &mut stage));
        assert_eq!(director.current_scene(), 1);

        // Scene 2 was never touched
        assert!(!stage.scenes[2].root_group().visible);
    }

    #[test]
    fn test_same_index_and_out_of_range_are_noops() {
        let (mut director, mut stage) = setup();
        let t0 = Instant::now();

        assert!(!director.go_to(0, t0, &mut stage));
        assert!(!director.go_to(99, t0, &mut stage));
        assert!(!director.apply(NavIntent::Advance(-1), t0, &mut stage));
        assert_eq!(director.current_scene(), 0);
        assert!(!director.is_locked());
        // No sub-animations scheduled
        assert!(director.timeline.is_none());
    }

    #[test]
    fn test_accepted_sequences_stay_in_bounds() {
        let (mut director, mut stage) = setup();
        let mut now = Instant::now();

        let intents = [
            NavIntent::Advance(1),
            NavIntent::JumpTo(13),
            NavIntent::Advance(1),
            NavIntent::Advance(-1),
            NavIntent::JumpTo(0),
            NavIntent::Advance(-1),
            NavIntent::JumpTo(7),
        ];
        for intent in intents {
            director.apply(intent, now, &mut stage);
            assert!(director.current_scene() < stage.len());
            // Let each transition finish before the next intent
            now += secs(1.0);
            director.update(now, &mut stage);
            assert!(!director.is_locked());
        }
        assert_eq!(director.current_scene(), 7);
    }

    #[test]
    fn test_home_end_jump_without_intermediate_indices() {
        let (mut director, mut stage) = setup();
        let t0 = Instant::now();

        director.apply(NavIntent::JumpTo(13), t0, &mut stage);
        assert_eq!(director.current_scene(), 13);
        director.update(t0 + secs(1.0), &mut stage);

        director.apply(NavIntent::JumpTo(0), t0 + secs(1.1), &mut stage);
        assert_eq!(director.current_scene(), 0);
        // One transaction each: only the endpoints ever rendered
        for i in 1..13 {
            assert!(!stage.scenes[i].root_group().visible, "scene {i} leaked in");
        }
    }

    #[test]
    fn test_fallback_release_when_target_has_no_card() {
        let (mut director, mut stage) = setup();
        stage.scenes[2].card = None;
        let t0 = Instant::now();

        assert!(director.go_to(2, t0, &mut stage));
        director.update(t0 + secs(0.45), &mut stage);
        assert!(director.is_locked());

        // Fallback deadline at 500 ms frees the lock with the camera mid-move
        director.update(t0 + secs(0.5), &mut stage);
        assert!(!director.is_locked());
        assert_ne!(stage.camera.position.z, Camera::rest_z(-50.0));

        // The next accepted transition snaps residual tracks to their ends
        assert!(director.go_to(3, t0 + secs(0.52), &mut stage));
        assert!(!stage.scenes[0].root_group().visible);
        director.update(t0 + secs(1.2), &mut stage);
        assert!(!director.is_locked());
        assert_eq!(stage.camera.position.z, Camera::rest_z(-75.0));
    }

    #[test]
    fn test_transition_events_on_bus() {
        let bus = EventBus::new();
        let stage = Stage::build(1);
        let mut director = SceneDirector::new(stage.len()).with_emitter(bus.emitter());
        let mut stage = stage;
        let t0 = Instant::now();

        director.go_to(4, t0, &mut stage);
        director.update(t0 + secs(1.0), &mut stage);

        let events = bus.poll();
        assert_eq!(events.len(), 2);
        let started = downcast_event::<TransitionStartedEvent>(&events[0]).unwrap();
        assert_eq!((started.from, started.to), (0, 4));
        let finished = downcast_event::<TransitionFinishedEvent>(&events[1]).unwrap();
        assert_eq!((finished.from, finished.to), (0, 4));
    }

    #[test]
    fn test_snap_to_swaps_without_lock() {
        let (mut director, mut stage) = setup();
        assert!(director.snap_to(5, &mut stage));
        assert_eq!(director.current_scene(), 5);
        assert!(!director.is_locked());
        assert!(!stage.scenes[0].root_group().visible);
        assert!(stage.scenes[5].root_group().visible);
        assert_eq!(stage.camera.position.z, Camera::rest_z(stage.scenes[5].depth));
        // Same index is a no-op
        assert!(!director.snap_to(5, &mut stage));
    }

    #[test]
    fn test_update_without_transition_is_noop() {
        let (mut director, mut stage) = setup();
        let before = stage.camera.position.z;
        director.update(Instant::now(), &mut stage);
        assert_eq!(stage.camera.position.z, before);
        assert!(!director.is_locked());
    }
}
