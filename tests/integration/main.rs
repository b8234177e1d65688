//! Integration test driver for `tests/integration/` submodule.
//!
//! All tests run on the host with no real hardware required.

mod blink_service_tests;
mod mock_hw;
