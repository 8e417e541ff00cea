//! UI Widgets - modular, reusable UI components
//!
//! Each widget is self-contained and communicates via EventBus

pub mod cards;
pub mod hud;
pub mod viewport;

pub use hud::{Hud, HintDismissedEvent, NavRequestEvent};
