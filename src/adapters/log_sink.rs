//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing blink events to the `log` facade
//! (ESP-IDF logger → UART / USB-CDC on the board).

use log::info;

use crate::app::events::BlinkEvent;
use crate::app::level::Level;
use crate::app::ports::EventSink;

/// Log target; shows up as the tag in ESP-IDF log lines.
pub const LOG_TAG: &str = "blink";

/// Text logged for a transition to `level`.
pub const fn transition_message(level: Level) -> &'static str {
    match level {
        Level::Low => "LED OFF",
        Level::High => "LED ON",
    }
}

/// Adapter that logs every [`BlinkEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &BlinkEvent) {
        match event {
            BlinkEvent::Started { gpio, off_ms, on_ms } => {
                info!(
                    target: LOG_TAG,
                    "Blinking GPIO {} (off {} ms, on {} ms)", gpio, off_ms, on_ms
                );
            }
            BlinkEvent::LevelChanged(level) => {
                info!(target: LOG_TAG, "{}", transition_message(*level));
            }
        }
    }
}
