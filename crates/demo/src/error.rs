//! Demo error types.

use dispatcher::DispatchError;
use domain::CustomerError;
use thiserror::Error;

/// Errors that can stop the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A customer operation was rejected.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// A strict dispatcher operation failed.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// The metrics recorder could not be installed.
    #[error("Metrics setup error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}
