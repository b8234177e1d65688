//! Mock adapters for integration tests.
//!
//! Every call is recorded so tests can assert on the full history
//! without touching real GPIO registers or sleeping.

use blink::app::events::BlinkEvent;
use blink::app::level::Level;
use blink::app::ports::{EventSink, OutputPort};
use blink::error::{OutputError, Result};
use embedded_hal::delay::DelayNs;

// ── MockPin ───────────────────────────────────────────────────

pub struct MockPin {
    pub writes: Vec<Level>,
    /// Write index (0-based) at which `set_level` starts failing.
    pub fail_from: Option<usize>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail_from: None,
        }
    }

    pub fn failing_from(n: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_from: Some(n),
        }
    }
}

impl OutputPort for MockPin {
    fn set_level(&mut self, level: Level) -> Result<()> {
        if self.fail_from.is_some_and(|n| self.writes.len() >= n) {
            return Err(OutputError::WriteFailed.into());
        }
        self.writes.push(level);
        Ok(())
    }

    fn level(&self) -> Option<Level> {
        self.writes.last().copied()
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records each requested delay in milliseconds.
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            delays_ms: Vec::new(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

// ── EventLog ──────────────────────────────────────────────────

pub struct EventLog {
    pub events: Vec<BlinkEvent>,
}

#[allow(dead_code)]
impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn transitions(&self) -> Vec<Level> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BlinkEvent::LevelChanged(l) => Some(*l),
                BlinkEvent::Started { .. } => None,
            })
            .collect()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &BlinkEvent) {
        self.events.push(*event);
    }
}
