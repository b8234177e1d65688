//! Port traits — the boundary between the blink loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BlinkService (domain)
//! ```
//!
//! Driven adapters (the LED driver, the log sink) implement these traits.
//! Delays go through `embedded_hal::delay::DelayNs` directly, so any HAL
//! delay provider plugs in without a wrapper.

use crate::error::Result;

use super::events::BlinkEvent;
use super::level::Level;

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the LED pin.
pub trait OutputPort {
    /// Drive the pin to `level`.
    fn set_level(&mut self, level: Level) -> Result<()>;

    /// Last level successfully driven, `None` before the first write.
    fn level(&self) -> Option<Level>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`BlinkEvent`]s through this port.  Adapters decide
/// where they go.
pub trait EventSink {
    fn emit(&mut self, event: &BlinkEvent);
}
