//! Demo entry point.

use demo::telemetry::{init_metrics, init_tracing};
use demo::{Config, DemoError, run_scenario};
use domain::CustomerService;

fn main() -> Result<(), DemoError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config)?;

    // 2. Install Prometheus metrics recorder
    let metrics_handle = init_metrics()?;

    // 3. Run the scenario with the console-log handlers registered
    let mut service = CustomerService::with_default_handlers();
    let report = run_scenario(&mut service).inspect_err(|err| {
        tracing::error!(error = %err, "scenario failed");
    })?;

    tracing::info!(
        customers = report.customers.len(),
        registry_cleared = report.registry_cleared,
        "scenario complete"
    );

    if config.print_metrics {
        println!("{}", metrics_handle.render());
    }

    Ok(())
}
