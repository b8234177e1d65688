//! Blink service — the application core.
//!
//! [`BlinkService`] owns the configuration and the loop state (next level,
//! transition count).  All I/O flows through ports injected at call
//! sites, so the loop runs unchanged against mock adapters on the host.
//!
//! ```text
//!                 ┌────────────────────────┐ ──▶ EventSink
//!   OutputPort ◀──│      BlinkService      │
//!                 │  LOW ─▶ HIGH ─▶ LOW …   │ ──▶ DelayNs
//!                 └────────────────────────┘
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::BlinkConfig;
use crate::error::Result;

use super::events::BlinkEvent;
use super::level::Level;
use super::ports::{EventSink, OutputPort};

/// Drives the LED pin through alternating levels.
pub struct BlinkService {
    config: BlinkConfig,
    next: Level,
    transitions: u64,
}

impl BlinkService {
    /// Construct the service.  Does not touch hardware — call [`start`]
    /// and then [`run`].
    ///
    /// [`start`]: Self::start
    /// [`run`]: Self::run
    pub fn new(config: BlinkConfig) -> Self {
        let next = config.initial_level;
        Self {
            config,
            next,
            transitions: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the loop parameters.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&BlinkEvent::Started {
            gpio: self.config.blink_gpio,
            off_ms: self.config.off_ms,
            on_ms: self.config.on_ms,
        });
    }

    /// Perform one transition: drive the next level, report it, then hold.
    ///
    /// If the write fails nothing is reported, no delay is taken and the
    /// same level is attempted again on the next call.
    pub fn step(
        &mut self,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<Level> {
        let level = self.next;
        out.set_level(level)?;
        sink.emit(&BlinkEvent::LevelChanged(level));

        self.transitions = self.transitions.wrapping_add(1);
        self.next = level.toggled();

        let hold = self.config.hold_ms(level);
        debug!("blink: holding {:?} for {} ms", level, hold);
        delay.delay_ms(hold);
        Ok(level)
    }

    /// Run exactly `transitions` steps.
    pub fn run_for(
        &mut self,
        transitions: u64,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        for _ in 0..transitions {
            self.step(out, delay, sink)?;
        }
        Ok(())
    }

    /// Run forever.  Returns only if driving the pin fails.
    pub fn run(
        &mut self,
        out: &mut impl OutputPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<Infallible> {
        loop {
            self.step(out, delay, sink)?;
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Level the next [`step`](Self::step) will drive.
    pub fn next_level(&self) -> Level {
        self.next
    }

    /// Successful transitions since construction.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
