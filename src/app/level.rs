//! Logical output level of the blink pin.

use serde::{Deserialize, Serialize};

/// Level driven onto the LED pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// Pin driven LOW — LED off.
    Low,
    /// Pin driven HIGH — LED on.
    High,
}

impl Level {
    /// The opposite level.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<Level> for embedded_hal::digital::PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => Self::Low,
            Level::High => Self::High,
        }
    }
}
