//! LED driver and hardware initialisation.

pub mod hw_init;
pub mod led;
