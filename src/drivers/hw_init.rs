//! One-shot GPIO initialisation and raw pin access.
//!
//! Configures the LED pin using raw ESP-IDF sys calls.  Called once from
//! `main()` before the blink loop starts.

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin, StatefulOutputPin};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{
    esp, gpio_mode_t_GPIO_MODE_OUTPUT, gpio_reset_pin, gpio_set_direction, gpio_set_level,
};
#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error types ───────────────────────────────────────────────

/// Errors during one-shot peripheral initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    InvalidPin(i32),
    ResetFailed(i32),
    DirectionFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPin(pin)     => write!(f, "GPIO {} is not a valid output pin", pin),
            Self::ResetFailed(rc)     => write!(f, "GPIO reset failed (rc={})", rc),
            Self::DirectionFailed(rc) => write!(f, "GPIO set direction failed (rc={})", rc),
        }
    }
}

/// A level write rejected by the GPIO driver.  Carries the ESP-IDF return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioWriteError(pub i32);

impl digital::Error for GpioWriteError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

// ── Output configuration ──────────────────────────────────────

/// Reset `pin` to its default pad state, then make it a push-pull output.
///
/// The reset selects the GPIO function in the IOMUX, which some boards
/// need before the pin responds to level writes.
#[cfg(target_os = "espidf")]
pub fn init_blink_output(pin: i32) -> Result<(), HwInitError> {
    if !pins::is_valid_output_gpio(pin) {
        return Err(HwInitError::InvalidPin(pin));
    }
    // SAFETY: Called once from main() before the loop; single-threaded.
    esp!(unsafe { gpio_reset_pin(pin) }).map_err(|e| HwInitError::ResetFailed(e.code()))?;
    esp!(unsafe { gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT) })
        .map_err(|e| HwInitError::DirectionFailed(e.code()))?;
    info!("hw_init: GPIO {} configured as output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_blink_output(pin: i32) -> Result<(), HwInitError> {
    if !pins::is_valid_output_gpio(pin) {
        return Err(HwInitError::InvalidPin(pin));
    }
    log::info!("hw_init(sim): GPIO {} output init skipped", pin);
    Ok(())
}

// ── Raw output pin ────────────────────────────────────────────

/// An already-configured output GPIO, written through `gpio_set_level`.
///
/// On host targets the level is only recorded in memory.
#[derive(Debug)]
pub struct SysGpioPin {
    pin: i32,
    high: bool,
}

impl SysGpioPin {
    /// Wrap `pin`.  [`init_blink_output`] must have succeeded for it first.
    pub fn new(pin: i32) -> Self {
        Self { pin, high: false }
    }

    #[cfg(target_os = "espidf")]
    fn write(&mut self, high: bool) -> Result<(), GpioWriteError> {
        // SAFETY: gpio_set_level writes to a pin configured by
        // init_blink_output(); main-task only.
        esp!(unsafe { gpio_set_level(self.pin, u32::from(high)) })
            .map_err(|e| GpioWriteError(e.code()))?;
        self.high = high;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn write(&mut self, high: bool) -> Result<(), GpioWriteError> {
        self.high = high;
        Ok(())
    }
}

impl ErrorType for SysGpioPin {
    type Error = GpioWriteError;
}

impl OutputPin for SysGpioPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

/// Reports the last level written, not a pad read-back.
impl StatefulOutputPin for SysGpioPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
