//! Integration tests for the demo wiring.
//!
//! Global subscriber and recorder installation can only happen once per
//! process, so everything touching them lives in a single test.

use demo::telemetry::{init_metrics, init_tracing};
use demo::{Config, DemoError, LogFormat, run_scenario};
use domain::CustomerService;

#[test]
fn telemetry_and_scenario_end_to_end() {
    let config = Config {
        log_level: "debug".to_string(),
        log_format: LogFormat::Json,
        print_metrics: true,
    };
    init_tracing(&config).unwrap();
    assert!(matches!(
        init_tracing(&config),
        Err(DemoError::Logging(_))
    ));

    let handle = init_metrics().unwrap();

    let mut service = CustomerService::with_default_handlers();
    let report = run_scenario(&mut service).unwrap();
    assert_eq!(report.customers.len(), 3);

    let rendered = handle.render();
    assert!(rendered.contains("customers_created 3"));
    assert!(rendered.contains("customer_address_changes 1"));
    assert!(rendered.contains("dispatcher_events_notified"));
}
