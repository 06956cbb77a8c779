//! Terminal console for a remote ATS power monitor.
//!
//! Subscribes to the device's MQTT topic tree over websockets and projects
//! voltage, source, backup, alarm and generator state into a terminal
//! dashboard, with a start/stop control channel back to the device.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dashboard;
pub mod dispatch;
pub mod error;
pub mod i18n;
pub mod transport;
pub mod ui;
