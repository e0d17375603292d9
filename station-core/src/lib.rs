//! Hardware independent part of the solar weather station firmware.
//!
//! Everything here runs on the ESP32 as well as on the host, which is where
//! the unit tests live.

#![no_std]

pub mod atmosphere;
pub mod battery;
pub mod clock;
pub mod config;
pub mod history;
pub mod i18n;
pub mod report;
pub mod zambretti;

pub use config::{Config, Language};
pub use history::{HistoryUpdate, PressureHistory};
pub use report::{Measurements, Reading, Report};
pub use zambretti::{Forecast, Trend};
