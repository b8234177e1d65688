//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to                  |
//! |------------|------------|------------------------------|
//! | `delay`    | DelayNs    | FreeRTOS task delay          |
//! | `log_sink` | EventSink  | Serial log output            |

pub mod delay;
pub mod log_sink;
