//! Integration tests for the BlinkService → LED → log pipeline.
//!
//! These run on the host and drive the loop through mock adapters and the
//! real `LedDriver` / `SysGpioPin` simulation path.

use super::mock_hw::{EventLog, MockDelay, MockPin};

use blink::app::events::BlinkEvent;
use blink::app::level::Level;
use blink::app::ports::OutputPort;
use blink::app::service::BlinkService;
use blink::config::BlinkConfig;
use blink::drivers::hw_init::{self, SysGpioPin};
use blink::drivers::led::LedDriver;
use blink::error::{Error, OutputError};

fn make_service() -> (BlinkService, MockPin, MockDelay, EventLog) {
    (
        BlinkService::new(BlinkConfig::default()),
        MockPin::new(),
        MockDelay::new(),
        EventLog::new(),
    )
}

// ── Default loop shape ────────────────────────────────────────

#[test]
fn default_loop_is_low_then_high_every_500ms() {
    let (mut svc, mut pin, mut delay, mut log) = make_service();

    svc.run_for(6, &mut pin, &mut delay, &mut log).unwrap();

    assert_eq!(
        pin.writes,
        vec![
            Level::Low,
            Level::High,
            Level::Low,
            Level::High,
            Level::Low,
            Level::High
        ]
    );
    assert_eq!(delay.delays_ms, vec![500; 6]);
    assert_eq!(svc.transitions(), 6);
}

#[test]
fn each_transition_is_logged_once_in_order() {
    let (mut svc, mut pin, mut delay, mut log) = make_service();

    svc.start(&mut log);
    svc.run_for(4, &mut pin, &mut delay, &mut log).unwrap();

    assert_eq!(
        log.events[0],
        BlinkEvent::Started {
            gpio: 2,
            off_ms: 500,
            on_ms: 500
        }
    );
    assert_eq!(log.transitions(), pin.writes);
}

#[test]
fn asymmetric_holds_follow_level() {
    let config = BlinkConfig {
        off_ms: 900,
        on_ms: 100,
        initial_level: Level::High,
        ..BlinkConfig::default()
    };
    let mut svc = BlinkService::new(config);
    let (mut pin, mut delay, mut log) = (MockPin::new(), MockDelay::new(), EventLog::new());

    svc.run_for(3, &mut pin, &mut delay, &mut log).unwrap();

    assert_eq!(pin.writes, vec![Level::High, Level::Low, Level::High]);
    assert_eq!(delay.delays_ms, vec![100, 900, 100]);
}

// ── Failure path ──────────────────────────────────────────────

#[test]
fn run_stops_on_first_write_failure() {
    let (mut svc, _, mut delay, mut log) = make_service();
    let mut pin = MockPin::failing_from(3);

    let err = match svc.run(&mut pin, &mut delay, &mut log) {
        Ok(never) => match never {},
        Err(e) => e,
    };

    assert_eq!(err, Error::Output(OutputError::WriteFailed));
    assert_eq!(svc.transitions(), 3);
    assert_eq!(log.transitions().len(), 3);
    assert_eq!(delay.delays_ms.len(), 3);
    // The level that failed is retried next.
    assert_eq!(svc.next_level(), Level::High);
}

#[test]
fn run_for_propagates_failure() {
    let (mut svc, _, mut delay, mut log) = make_service();
    let mut pin = MockPin::failing_from(0);

    assert!(svc.run_for(2, &mut pin, &mut delay, &mut log).is_err());
    assert!(log.events.is_empty());
    assert!(delay.delays_ms.is_empty());
}

// ── Real driver stack on the simulation path ─────────────────

#[test]
fn led_driver_over_sim_pin_tracks_loop() {
    let config = BlinkConfig::default();
    hw_init::init_blink_output(config.blink_gpio).unwrap();

    let mut led = LedDriver::new(SysGpioPin::new(config.blink_gpio));
    let mut svc = BlinkService::new(config);
    let (mut delay, mut log) = (MockDelay::new(), EventLog::new());

    svc.step(&mut led, &mut delay, &mut log).unwrap();
    assert_eq!(led.level(), Some(Level::Low));

    svc.step(&mut led, &mut delay, &mut log).unwrap();
    assert_eq!(led.level(), Some(Level::High));
    assert_eq!(log.transitions(), vec![Level::Low, Level::High]);
}
