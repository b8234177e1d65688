//! System configuration parameters
//!
//! All tunable parameters for the blink firmware. Values are compile-time
//! defaults, checked once at boot by [`BlinkConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::app::level::Level;
use crate::error::{Error, Result};
use crate::pins;

/// Shortest hold time accepted (milliseconds).
///
/// One FreeRTOS tick at the default 100 Hz tick rate.  Anything shorter
/// converts to zero ticks and the task never actually blocks.
pub const MIN_HOLD_MS: u32 = 10;

/// Core blink configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkConfig {
    /// GPIO driving the LED
    pub blink_gpio: i32,
    /// Time the pin stays LOW before the next transition (milliseconds)
    pub off_ms: u32,
    /// Time the pin stays HIGH before the next transition (milliseconds)
    pub on_ms: u32,
    /// First level driven after init
    pub initial_level: Level,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            blink_gpio: pins::BLINK_GPIO,
            off_ms: 500,
            on_ms: 500,
            initial_level: Level::Low,
        }
    }
}

impl BlinkConfig {
    /// Reject out-of-range values.  Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if !pins::is_valid_output_gpio(self.blink_gpio) {
            return Err(Error::Config("blink_gpio is not an output-capable pin"));
        }
        if self.off_ms < MIN_HOLD_MS {
            return Err(Error::Config("off_ms shorter than one tick"));
        }
        if self.on_ms < MIN_HOLD_MS {
            return Err(Error::Config("on_ms shorter than one tick"));
        }
        Ok(())
    }

    /// How long to hold the pin after driving it to `level`.
    pub fn hold_ms(&self, level: Level) -> u32 {
        match level {
            Level::Low => self.off_ms,
            Level::High => self.on_ms,
        }
    }

    /// Length of one full off/on cycle (milliseconds).
    pub fn period_ms(&self) -> u32 {
        self.off_ms.saturating_add(self.on_ms)
    }
}
