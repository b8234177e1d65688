//! Blink Firmware — Main Entry Point
//!
//! ```text
//!  LedDriver<SysGpioPin>   TaskDelay   LogEventSink
//!      (OutputPort)        (DelayNs)    (EventSink)
//!  ─────────────────── port boundary ───────────────────
//!                 BlinkService (loop)
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use blink::adapters::delay::TaskDelay;
use blink::adapters::log_sink::LogEventSink;
use blink::app::service::BlinkService;
use blink::config::BlinkConfig;
use blink::drivers::hw_init::{self, SysGpioPin};
use blink::drivers::led::LedDriver;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Blink v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let config = BlinkConfig::default();
    config.validate()?;
    info!("Config: GPIO {}, {} ms period", config.blink_gpio, config.period_ms());

    // ── 3. Pin init ───────────────────────────────────────────
    if let Err(e) = hw_init::init_blink_output(config.blink_gpio) {
        error!("GPIO init failed: {}", e);
        return Err(blink::error::Error::from(e).into());
    }

    // ── 4. Construct adapters + service ───────────────────────
    let mut led = LedDriver::new(SysGpioPin::new(config.blink_gpio));
    let mut delay = TaskDelay::new();
    let mut sink = LogEventSink::new();
    let mut service = BlinkService::new(config);

    service.start(&mut sink);

    // ── 5. Loop ───────────────────────────────────────────────
    match service.run(&mut led, &mut delay, &mut sink) {
        Ok(never) => match never {},
        Err(e) => {
            error!(
                "Blink loop stopped after {} transitions: {}",
                service.transitions(),
                e
            );
            Err(e.into())
        }
    }
}
