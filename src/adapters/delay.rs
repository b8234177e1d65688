//! Task delay adapter.
//!
//! - **`target_os = "espidf"`** — suspends the calling FreeRTOS task via
//!   `FreeRtos::delay_ms`.  Blocking in the scheduler lets the idle task
//!   run, which keeps the task watchdog fed.
//! - **`not(target_os = "espidf")`** — sleeps the current thread for host
//!   simulation.

use embedded_hal::delay::DelayNs;

/// Delay provider for the blink loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskDelay;

impl TaskDelay {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl DelayNs for TaskDelay {
    fn delay_ns(&mut self, ns: u32) {
        esp_idf_hal::delay::FreeRtos::delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        esp_idf_hal::delay::FreeRtos::delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }
}

#[cfg(not(target_os = "espidf"))]
impl DelayNs for TaskDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
