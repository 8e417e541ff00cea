//! Core engine modules - events, input, timeline, director
//!
//! These modules form the transition engine, independent of UI.

pub mod director;
pub mod event_bus;
pub mod input;
pub mod timeline;

// Re-exports for convenience
pub use director::{SceneDirector, TransitionFinishedEvent, TransitionStartedEvent};
pub use event_bus::EventBus;
pub use input::{InputUnifier, NavIntent};
pub use timeline::{Ease, TransitionTimeline, Tween};
