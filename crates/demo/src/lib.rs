//! Scripted customer-events scenario.
//!
//! Wires the customer service, its console-log handlers, structured logging
//! (tracing) and Prometheus metrics together for the `demo` binary.

pub mod config;
pub mod error;
pub mod scenario;
pub mod telemetry;

pub use config::{Config, LogFormat};
pub use error::DemoError;
pub use scenario::{ScenarioReport, run_scenario};
