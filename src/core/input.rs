//! Input unifier - four heterogeneous sources, one discrete intent signal.
//!
//! Wheel, touch swipe and keyboard arrive here as UI-agnostic
//! [`RawNavEvent`]s (the app layer translates egui events); dot clicks skip
//! the unifier entirely and go straight to the director as jumps - rejecting
//! an out-of-turn jump is the state machine's responsibility, not the input
//! layer's.
//!
//! Per-source gating happens before an intent is emitted:
//! - wheel: fixed deadtime window since the last ACCEPTED wheel event
//!   (boundary inclusive), plus lock rejection
//! - touch: minimum swipe distance (boundary inclusive), lock rejection
//! - keyboard: fixed key table, lock rejection
//!
//! Every result reports whether the raw event should be consumed (the
//! preventDefault analogue): in-range wheel/keys consume, and so do wheel
//! events dropped by lock or deadtime - scrolling past the first/last scene
//! does NOT consume, so the event falls through to whatever hosts us.

use std::time::{Duration, Instant};

use log::trace;

/// Default deadtime between accepted wheel events.
pub const WHEEL_DEADTIME_MS: u64 = 600;

/// Default minimum swipe distance, in points.
pub const SWIPE_THRESHOLD: f32 = 60.0;

/// A normalized, discrete navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// Step relative to the current scene (+1 / -1).
    Advance(i32),
    /// Go directly to an absolute index.
    JumpTo(usize),
}

/// Navigation keys, decoded from the window layer. The mapping to intents
/// is the unifier's fixed table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    PageDown,
    Space,
    ArrowUp,
    PageUp,
    Home,
    End,
}

/// Raw input as delivered by the app layer. `delta_y > 0` means
/// "scrolling down" (toward the next scene).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawNavEvent {
    Wheel { delta_y: f32 },
    TouchStart { y: f32 },
    TouchEnd { y: f32 },
    Key(NavKey),
}

/// Read-only gate view of the transition state. Single writer (the
/// director); the unifier only ever reads a snapshot.
#[derive(Clone, Copy, Debug)]
pub struct NavGate {
    pub current: usize,
    pub locked: bool,
}

/// Outcome of unifying one raw event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Unified {
    pub intent: Option<NavIntent>,
    /// Suppress the event's default handling.
    pub consume: bool,
}

impl Unified {
    const IGNORED: Unified = Unified {
        intent: None,
        consume: false,
    };

    const SWALLOWED: Unified = Unified {
        intent: None,
        consume: true,
    };

    fn accept(intent: NavIntent) -> Self {
        Self {
            intent: Some(intent),
            consume: true,
        }
    }
}

/// Normalizes wheel/touch/keyboard input into [`NavIntent`]s.
#[derive(Clone, Debug)]
pub struct InputUnifier {
    scene_count: usize,
    wheel_deadtime: Duration,
    swipe_threshold: f32,
    /// Instant of the last accepted wheel event. Dropped events do not
    /// extend the window.
    last_wheel: Option<Instant>,
    touch_start_y: Option<f32>,
}

impl InputUnifier {
    pub fn new(scene_count: usize) -> Self {
        Self {
            scene_count,
            wheel_deadtime: Duration::from_millis(WHEEL_DEADTIME_MS),
            swipe_threshold: SWIPE_THRESHOLD,
            last_wheel: None,
            touch_start_y: None,
        }
    }

    pub fn with_wheel_deadtime(mut self, deadtime: Duration) -> Self {
        self.wheel_deadtime = deadtime;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Unify one raw event. `now` comes from the frame loop; `gate` is the
    /// director's current snapshot.
    pub fn handle(&mut self, event: RawNavEvent, now: Instant, gate: NavGate) -> Unified {
        match event {
            RawNavEvent::Wheel { delta_y } => self.on_wheel(delta_y, now, gate),
            RawNavEvent::TouchStart { y } => {
                self.touch_start_y = Some(y);
                Unified::IGNORED
            }
            RawNavEvent::TouchEnd { y } => self.on_touch_end(y, gate),
            RawNavEvent::Key(key) => self.on_key(key, gate),
        }
    }

    fn on_wheel(&mut self, delta_y: f32, now: Instant, gate: NavGate) -> Unified {
        if delta_y == 0.0 {
            return Unified::IGNORED;
        }
        let in_deadtime = self
            .last_wheel
            .is_some_and(|last| now.duration_since(last) < self.wheel_deadtime);
        if gate.locked || in_deadtime {
            // Swallow so the host never scrolls mid-transition
            return Unified::SWALLOWED;
        }

        let dir: i32 = if delta_y > 0.0 { 1 } else { -1 };
        let next = gate.current as i32 + dir;
        if next < 0 || next >= self.scene_count as i32 {
            // Past the first/last scene: no effect, default not suppressed
            return Unified::IGNORED;
        }

        self.last_wheel = Some(now);
        trace!("wheel accepted: dir {dir}");
        Unified::accept(NavIntent::Advance(dir))
    }

    fn on_touch_end(&mut self, end_y: f32, gate: NavGate) -> Unified {
        let Some(start_y) = self.touch_start_y.take() else {
            return Unified::IGNORED;
        };
        if gate.locked {
            return Unified::IGNORED;
        }
        let diff = start_y - end_y;
        if diff.abs() < self.swipe_threshold {
            return Unified::IGNORED;
        }
        let dir: i32 = if diff > 0.0 { 1 } else { -1 };
        let next = gate.current as i32 + dir;
        if next < 0 || next >= self.scene_count as i32 {
            return Unified::IGNORED;
        }
        trace!("swipe accepted: dir {dir} ({diff:.0} pt)");
        Unified::accept(NavIntent::Advance(dir))
    }

    fn on_key(&mut self, key: NavKey, gate: NavGate) -> Unified {
        if gate.locked {
            return Unified::IGNORED;
        }
        let step = match key {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space => 1,
            NavKey::ArrowUp | NavKey::PageUp => -1,
            NavKey::Home => return Unified::accept(NavIntent::JumpTo(0)),
            NavKey::End => return Unified::accept(NavIntent::JumpTo(self.scene_count - 1)),
        };
        let next = gate.current as i32 + step;
        if next < 0 || next >= self.scene_count as i32 {
            // Default action only suppressed for in-range results
            return Unified::IGNORED;
        }
        Unified::accept(NavIntent::Advance(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 14;

    fn idle(current: usize) -> NavGate {
        NavGate {
            current,
            locked: false,
        }
    }

    fn locked(current: usize) -> NavGate {
        NavGate {
            current,
            locked: true,
        }
    }

    #[test]
    fn test_wheel_deadtime_boundary_is_inclusive() {
        let mut unifier = InputUnifier::new(N);
        let t0 = Instant::now();

        let first = unifier.handle(RawNavEvent::Wheel { delta_y: 1.0 }, t0, idle(0));
        assert_eq!(first.intent, Some(NavIntent::Advance(1)));

        // Inside the window: dropped but swallowed
        let early = unifier.handle(
            RawNavEvent::Wheel { delta_y: 1.0 },
            t0 + Duration::from_millis(599),
            idle(1),
        );
        assert_eq!(early.intent, None);
        assert!(early.consume);

        // Exactly at the boundary: accepted (>=, not >)
        let at = unifier.handle(
            RawNavEvent::Wheel { delta_y: 1.0 },
            t0 + Duration::from_millis(600),
            idle(1),
        );
        assert_eq!(at.intent, Some(NavIntent::Advance(1)));
    }

    #[test]
    fn test_dropped_wheel_does_not_extend_deadtime() {
        let mut unifier = InputUnifier::new(N);
        let t0 = Instant::now();
        unifier.handle(RawNavEvent::Wheel { delta_y: 1.0 }, t0, idle(0));
        // Dropped at +400 ms; the window still ends at +600 ms
        unifier.handle(
            RawNavEvent::Wheel { delta_y: 1.0 },
            t0 + Duration::from_millis(400),
            idle(1),
        );
        let at = unifier.handle(
            RawNavEvent::Wheel { delta_y: 1.0 },
            t0 + Duration::from_millis(600),
            idle(1),
        );
        assert_eq!(at.intent, Some(NavIntent::Advance(1)));
    }

    #[test]
    fn test_wheel_locked_swallowed() {
        let mut unifier = InputUnifier::new(N);
        let got = unifier.handle(RawNavEvent::Wheel { delta_y: 3.0 }, Instant::now(), locked(2));
        assert_eq!(got.intent, None);
        assert!(got.consume);
    }

    #[test]
    fn test_wheel_out_of_range_falls_through() {
        let mut unifier = InputUnifier::new(N);
        // Scrolling up at the first scene: nothing happens, not consumed
        let got = unifier.handle(RawNavEvent::Wheel { delta_y: -2.0 }, Instant::now(), idle(0));
        assert_eq!(got, Unified::IGNORED);
        // And down at the last scene
        let got = unifier.handle(RawNavEvent::Wheel { delta_y: 2.0 }, Instant::now(), idle(N - 1));
        assert_eq!(got, Unified::IGNORED);
    }

    #[test]
    fn test_swipe_threshold_boundary_is_inclusive() {
        let mut unifier = InputUnifier::new(N);
        let now = Instant::now();

        unifier.handle(RawNavEvent::TouchStart { y: 500.0 }, now, idle(3));
        let below = unifier.handle(RawNavEvent::TouchEnd { y: 440.5 }, now, idle(3));
        assert_eq!(below.intent, None);

        // Exactly 60 pt upward swipe advances
        unifier.handle(RawNavEvent::TouchStart { y: 500.0 }, now, idle(3));
        let at = unifier.handle(RawNavEvent::TouchEnd { y: 440.0 }, now, idle(3));
        assert_eq!(at.intent, Some(NavIntent::Advance(1)));

        // Downward swipe retreats
        unifier.handle(RawNavEvent::TouchStart { y: 300.0 }, now, idle(3));
        let back = unifier.handle(RawNavEvent::TouchEnd { y: 400.0 }, now, idle(3));
        assert_eq!(back.intent, Some(NavIntent::Advance(-1)));
    }

    #[test]
    fn test_touch_ignored_while_locked() {
        let mut unifier = InputUnifier::new(N);
        let now = Instant::now();
        unifier.handle(RawNavEvent::TouchStart { y: 500.0 }, now, idle(3));
        let got = unifier.handle(RawNavEvent::TouchEnd { y: 100.0 }, now, locked(3));
        assert_eq!(got, Unified::IGNORED);
    }

    #[test]
    fn test_key_table() {
        let mut unifier = InputUnifier::new(N);
        let now = Instant::now();
        for (key, expect) in [
            (NavKey::ArrowDown, NavIntent::Advance(1)),
            (NavKey::PageDown, NavIntent::Advance(1)),
            (NavKey::Space, NavIntent::Advance(1)),
            (NavKey::ArrowUp, NavIntent::Advance(-1)),
            (NavKey::PageUp, NavIntent::Advance(-1)),
            (NavKey::Home, NavIntent::JumpTo(0)),
            (NavKey::End, NavIntent::JumpTo(13)),
        ] {
            let got = unifier.handle(RawNavEvent::Key(key), now, idle(5));
            assert_eq!(got.intent, Some(expect), "{key:?}");
            assert!(got.consume, "{key:?}");
        }
    }

    #[test]
    fn test_key_out_of_range_not_consumed() {
        let mut unifier = InputUnifier::new(N);
        let now = Instant::now();
        let got = unifier.handle(RawNavEvent::Key(NavKey::ArrowUp), now, idle(0));
        assert_eq!(got, Unified::IGNORED);
        let got = unifier.handle(RawNavEvent::Key(NavKey::Space), now, idle(N - 1));
        assert_eq!(got, Unified::IGNORED);
    }

    #[test]
    fn test_home_end_jump_from_anywhere() {
        let mut unifier = InputUnifier::new(N);
        let now = Instant::now();
        for start in [0, 5, 13] {
            assert_eq!(
                unifier.handle(RawNavEvent::Key(NavKey::Home), now, idle(start)).intent,
                Some(NavIntent::JumpTo(0))
            );
            assert_eq!(
                unifier.handle(RawNavEvent::Key(NavKey::End), now, idle(start)).intent,
                Some(NavIntent::JumpTo(13))
            );
        }
    }
}
