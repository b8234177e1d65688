//! Single-colour LED driver.
//!
//! Works over any `embedded_hal::digital::OutputPin`.  On the board that
//! is a [`SysGpioPin`](super::hw_init::SysGpioPin); in tests it is
//! whatever mock the test supplies.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::app::level::Level;
use crate::app::ports::OutputPort;
use crate::error::{OutputError, Result};

pub struct LedDriver<P> {
    pin: P,
    current: Option<Level>,
}

impl<P: OutputPin> LedDriver<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, current: None }
    }
}

impl<P: OutputPin> OutputPort for LedDriver<P> {
    fn set_level(&mut self, level: Level) -> Result<()> {
        if let Err(e) = self.pin.set_state(level.into()) {
            warn!("LED: pin write failed ({:?})", e.kind());
            return Err(OutputError::WriteFailed.into());
        }
        self.current = Some(level);
        Ok(())
    }

    fn level(&self) -> Option<Level> {
        self.current
    }
}
