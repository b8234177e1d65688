//! Outbound application events.
//!
//! The [`BlinkService`](super::service::BlinkService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.

use super::level::Level;

/// Structured events emitted by the blink loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkEvent {
    /// The loop is about to start.
    Started { gpio: i32, off_ms: u32, on_ms: u32 },

    /// The pin was driven to a new level.
    LevelChanged(Level),
}
