//! Tween timeline for scene transitions.
//!
//! **Architecture**: Poll-driven, no completion callbacks. Every tween is
//! sampled against an `Instant` passed in from the frame loop, so tests can
//! advance time arithmetically instead of sleeping.
//!
//! A [`TransitionTimeline`] is the set of concurrently-started tracks for one
//! `from -> to` transition: outgoing/incoming card fades, outgoing/incoming
//! scene fades and the camera move. All tracks are registered in the same
//! synchronous step; only their delays and durations differ. The lock owner
//! ([`SceneDirector`](super::director::SceneDirector)) polls
//! [`TransitionTimeline::finished`] - a join over every track, with a
//! fallback deadline when the target scene has no card so the lock can never
//! be held forever.

use std::time::{Duration, Instant};

/// Schedule constants for one transition, in seconds from transition start.
/// Tuning happens here so the whole crossfade updates consistently.
pub mod schedule {
    /// Outgoing card fade/slide duration.
    pub const CARD_OUT_SECS: f32 = 0.25;
    /// Scene opacity ramp duration (both directions).
    pub const SCENE_FADE_SECS: f32 = 0.40;
    /// Camera depth tween duration - the longest track, it visually "leads".
    pub const CAMERA_SECS: f32 = 0.60;
    /// Delay before the incoming scene starts ramping up, so it overlaps the
    /// tail of the outgoing fade (crossfade, not hard cut).
    pub const SCENE_IN_DELAY_SECS: f32 = 0.15;
    /// Delay before the incoming card animates in.
    pub const CARD_IN_DELAY_SECS: f32 = 0.20;
    /// Incoming card fade/slide duration.
    pub const CARD_IN_SECS: f32 = 0.35;
    /// Vertical slide distance for card fades, in points.
    pub const CARD_SLIDE: f32 = 20.0;
    /// Lock release deadline when the target scene has no card.
    pub const FALLBACK_RELEASE_MS: u64 = 500;
    /// Progress-bar fill tween duration (cosmetic, owned by the hud).
    pub const PROGRESS_SECS: f32 = 0.40;
}

/// Easing curves used by the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// t^3 - slow start, used for the outgoing card.
    CubicIn,
    /// 1-(1-t)^3 - fast start, used for the incoming card.
    CubicOut,
    /// 1-(1-t)^4 - pronounced settle, used for the progress fill.
    QuartOut,
    /// Quartic in-out - the camera's pronounced lead/settle shape.
    QuartInOut,
}

impl Ease {
    /// Map linear progress `t` in [0,1] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::CubicIn => t * t * t,
            Ease::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Ease::QuartOut => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
            Ease::QuartInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = 1.0 - t;
                    1.0 - 8.0 * u * u * u * u
                }
            }
        }
    }
}

/// A single scalar tween: `from -> to` over `duration`, starting `delay`
/// after its anchor instant.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    anchor: Instant,
    delay: Duration,
    duration: Duration,
    ease: Ease,
}

impl Tween {
    /// Tween anchored at `anchor` (usually the transition start).
    pub fn new(from: f32, to: f32, anchor: Instant) -> Self {
        Self {
            from,
            to,
            anchor,
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            ease: Ease::Linear,
        }
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.delay = Duration::from_secs_f32(secs);
        self
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.duration = Duration::from_secs_f32(secs);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }

    /// Sample the tween at `now`. Holds `from` until the delay elapses and
    /// `to` forever after completion.
    pub fn value_at(&self, now: Instant) -> f32 {
        let begin = self.anchor + self.delay;
        if now < begin {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (now - begin).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// True once delay + duration have elapsed.
    pub fn finished(&self, now: Instant) -> bool {
        now >= self.anchor + self.delay + self.duration
    }

    /// Restart toward a new target from the current sampled value.
    ///
    /// Keeps duration and ease; clears any remaining delay. Used by the
    /// progress fill, which may be retargeted mid-flight.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.anchor = now;
        self.delay = Duration::ZERO;
    }
}

/// What a track's sampled value drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackTarget {
    /// Camera z position (value is the coordinate itself).
    CameraDepth,
    /// Opacity factor for scene `index`, fed to the scene-graph propagator.
    SceneFade { index: usize, hide_on_done: bool },
    /// Card opacity for scene `index`; slide offset is derived from the
    /// value as `(1 - opacity) * slide`.
    CardFade {
        index: usize,
        slide: f32,
        hide_on_done: bool,
    },
}

/// One sub-animation of a transition.
#[derive(Clone, Debug)]
pub struct Track {
    pub target: TrackTarget,
    pub tween: Tween,
    /// Set by the director once the completion action (hide) has fired.
    pub completed: bool,
}

impl Track {
    fn new(target: TrackTarget, tween: Tween) -> Self {
        Self {
            target,
            tween,
            completed: false,
        }
    }
}

/// All tracks of one `from -> to` transition plus the release rule.
#[derive(Clone, Debug)]
pub struct TransitionTimeline {
    pub from: usize,
    pub to: usize,
    started: Instant,
    tracks: Vec<Track>,
    /// Release deadline used when the target scene has no card.
    fallback_deadline: Option<Instant>,
}

impl TransitionTimeline {
    /// Build the track set for a transition. Everything starts in this one
    /// synchronous step; the schedule constants supply delays/durations.
    pub fn new(
        from: usize,
        to: usize,
        camera_from: f32,
        camera_to: f32,
        target_has_card: bool,
        started: Instant,
    ) -> Self {
        use schedule::*;

        let mut tracks = vec![
            // Outgoing card: fade/slide out, drop its visible state on completion.
            Track::new(
                TrackTarget::CardFade {
                    index: from,
                    slide: -CARD_SLIDE,
                    hide_on_done: true,
                },
                Tween::new(1.0, 0.0, started)
                    .duration(CARD_OUT_SECS)
                    .ease(Ease::CubicIn),
            ),
            // Outgoing scene: opacity ramp down, then stop rendering it.
            Track::new(
                TrackTarget::SceneFade {
                    index: from,
                    hide_on_done: true,
                },
                Tween::new(1.0, 0.0, started).duration(SCENE_FADE_SECS),
            ),
            // Camera move - longest duration, pronounced ease.
            Track::new(
                TrackTarget::CameraDepth,
                Tween::new(camera_from, camera_to, started)
                    .duration(CAMERA_SECS)
                    .ease(Ease::QuartInOut),
            ),
            // Incoming scene: ramp up after a short delay for the crossfade.
            Track::new(
                TrackTarget::SceneFade {
                    index: to,
                    hide_on_done: false,
                },
                Tween::new(0.0, 1.0, started)
                    .delay(SCENE_IN_DELAY_SECS)
                    .duration(SCENE_FADE_SECS),
            ),
        ];

        let fallback_deadline = if target_has_card {
            // Incoming card: visible immediately (director's job), animated in
            // with its own delay.
            tracks.push(Track::new(
                TrackTarget::CardFade {
                    index: to,
                    slide: CARD_SLIDE,
                    hide_on_done: false,
                },
                Tween::new(0.0, 1.0, started)
                    .delay(CARD_IN_DELAY_SECS)
                    .duration(CARD_IN_SECS)
                    .ease(Ease::CubicOut),
            ));
            None
        } else {
            Some(started + Duration::from_millis(FALLBACK_RELEASE_MS))
        };

        Self {
            from,
            to,
            started,
            tracks,
            fallback_deadline,
        }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }

    /// Join: true when every track has finished, or - targets without a card
    /// only - when the fallback deadline has passed. The lock must never be
    /// held by a missing completion path.
    pub fn finished(&self, now: Instant) -> bool {
        if self.tracks.iter().all(|t| t.tween.finished(now)) {
            return true;
        }
        self.fallback_deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Snap every unfinished track to its end value.
    ///
    /// Used when a new transition is accepted after a fallback release while
    /// residual tracks are still in flight: the old transition keeps its
    /// run-to-completion semantics, just instantly.
    pub fn finish_remaining(&mut self) -> Vec<(TrackTarget, f32)> {
        self.tracks
            .iter_mut()
            .map(|t| {
                t.completed = true;
                (t.target, t.tween.end_value())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn test_ease_endpoints() {
        for ease in [
            Ease::Linear,
            Ease::CubicIn,
            Ease::CubicOut,
            Ease::QuartOut,
            Ease::QuartInOut,
        ] {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
        // In-out is symmetric around the midpoint
        assert!((Ease::QuartInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_tween_holds_from_during_delay() {
        let t0 = Instant::now();
        let tw = Tween::new(0.0, 1.0, t0).delay(0.2).duration(0.4);
        assert_eq!(tw.value_at(t0), 0.0);
        assert_eq!(tw.value_at(t0 + secs(0.19)), 0.0);
        assert!(tw.value_at(t0 + secs(0.4)) > 0.0);
        assert_eq!(tw.value_at(t0 + secs(0.6)), 1.0);
        assert!(!tw.finished(t0 + secs(0.59)));
        assert!(tw.finished(t0 + secs(0.6)));
    }

    #[test]
    fn test_tween_retarget_continues_from_current_value() {
        let t0 = Instant::now();
        let mut tw = Tween::new(0.0, 1.0, t0).duration(0.4);
        let mid = t0 + secs(0.2);
        let v = tw.value_at(mid);
        tw.retarget(0.0, mid);
        assert_eq!(tw.value_at(mid), v);
        assert_eq!(tw.value_at(mid + secs(0.4)), 0.0);
    }

    #[test]
    fn test_timeline_join_waits_for_longest_track() {
        let t0 = Instant::now();
        let tl = TransitionTimeline::new(0, 1, 10.0, -15.0, true, t0);
        // Card-in ends at 0.55, camera at 0.6
        assert!(!tl.finished(t0 + secs(0.55)));
        assert!(tl.finished(t0 + secs(0.61)));
    }

    #[test]
    fn test_timeline_fallback_without_card() {
        let t0 = Instant::now();
        let tl = TransitionTimeline::new(0, 1, 10.0, -15.0, false, t0);
        assert!(!tl.finished(t0 + secs(0.4)));
        // Fallback releases at 500 ms even though the camera runs to 600 ms
        assert!(tl.finished(t0 + secs(0.5)));
    }

    #[test]
    fn test_timeline_schedules_expected_targets() {
        let t0 = Instant::now();
        let tl = TransitionTimeline::new(3, 4, -65.0, -90.0, true, t0);
        let targets: Vec<_> = tl.tracks().iter().map(|t| t.target).collect();
        assert!(targets.contains(&TrackTarget::SceneFade {
            index: 3,
            hide_on_done: true
        }));
        assert!(targets.contains(&TrackTarget::SceneFade {
            index: 4,
            hide_on_done: false
        }));
        assert!(targets.contains(&TrackTarget::CameraDepth));
        assert_eq!(targets.len(), 5);
    }

    #[test]
    fn test_finish_remaining_snaps_to_end_values() {
        let t0 = Instant::now();
        let mut tl = TransitionTimeline::new(0, 1, 10.0, -15.0, true, t0);
        let finals = tl.finish_remaining();
        for (target, value) in finals {
            match target {
                TrackTarget::CameraDepth => assert_eq!(value, -15.0),
                TrackTarget::SceneFade { index: 0, .. } => assert_eq!(value, 0.0),
                TrackTarget::SceneFade { index: 1, .. } => assert_eq!(value, 1.0),
                TrackTarget::CardFade { index: 0, .. } => assert_eq!(value, 0.0),
                TrackTarget::CardFade { index: 1, .. } => assert_eq!(value, 1.0),
                other => panic!("unexpected track {other:?}"),
            }
        }
    }
}
