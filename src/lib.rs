//! VOYAGE - Scroll-driven cosmic journey presentation library
//!
//! Re-exports all modules for use by binary targets.

// Core engine (events, input, timeline, director)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod paths;
pub mod scene;
pub mod settings;
pub mod widgets;

// Re-export commonly used types from core
pub use core::director::SceneDirector;
pub use core::event_bus::{downcast_event, BoxedEvent, EventBus, EventEmitter};
pub use core::input::{InputUnifier, NavIntent};
pub use core::timeline::{Ease, TransitionTimeline, Tween};

// Re-export the scene model
pub use scene::{Scene, Stage};
