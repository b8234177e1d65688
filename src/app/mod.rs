//! Application core — the blink loop, zero direct I/O.
//!
//! All interaction with hardware happens through the port traits in
//! [`ports`] and `embedded_hal::delay::DelayNs`, keeping this layer
//! testable without real peripherals.

pub mod events;
pub mod level;
pub mod ports;
pub mod service;
