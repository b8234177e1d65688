//! GPIO pin assignments for the blink board (ESP32-WROOM).
//!
//! Single source of truth — drivers reference this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output: on-board LED (HIGH = on, LOW = off).
pub const BLINK_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Output-capable pins
// ---------------------------------------------------------------------------

/// Highest output-capable GPIO on the ESP32.  GPIO 34 – 39 are input-only.
pub const MAX_OUTPUT_GPIO: i32 = 33;

/// Whether `pin` names an ESP32 GPIO that can be driven as an output.
///
/// Excludes GPIO 6 – 11 (wired to the SPI flash on WROOM/WROVER modules),
/// the numbers the chip does not bond out (20, 24, 28 – 31) and the
/// input-only pins above [`MAX_OUTPUT_GPIO`].
pub const fn is_valid_output_gpio(pin: i32) -> bool {
    matches!(pin, 0..=5 | 12..=19 | 21..=23 | 25..=27 | 32..=MAX_OUTPUT_GPIO)
}
