//! The scripted walk through the customer event flow.

use common::CustomerId;
use domain::{Address, Customer, CustomerCreatedEvent, CustomerService};

use crate::error::DemoError;

/// What the scenario did, for logging and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Customers created, in order.
    pub customers: Vec<Customer>,

    /// Handlers still registered for CustomerCreatedEvent before the final clear.
    pub created_handlers_after_unregister: usize,

    /// Whether the registry was empty at the end.
    pub registry_cleared: bool,
}

/// Runs the scenario against `service`.
///
/// 1. create a customer (both created handlers run)
/// 2. move it to a new address and activate it (address handler runs)
/// 3. unregister the first created handler, create another customer
/// 4. unregister everything, create a third customer (no handler runs)
#[tracing::instrument(skip(service))]
pub fn run_scenario(service: &mut CustomerService) -> Result<ScenarioReport, DemoError> {
    let mut customers = Vec::new();

    let mut mario = service.create_customer(CustomerId::new("123"), "Mario")?;
    let address = Address::new("Rua A", 100, "50000-000", "Recife")?;
    service.change_address(&mut mario, address);
    mario.activate()?;
    mario.add_reward_points(10);
    tracing::info!(
        customer_id = %mario.id(),
        active = mario.is_active(),
        reward_points = mario.reward_points(),
        "customer activated"
    );
    customers.push(mario);

    let first = service
        .dispatcher()
        .event_handlers::<CustomerCreatedEvent>(CustomerCreatedEvent::NAME)
        .and_then(|handlers| handlers.into_iter().next());
    if let Some(first) = first {
        service
            .dispatcher_mut()
            .try_unregister(CustomerCreatedEvent::NAME, &first)?;
    }
    let created_handlers_after_unregister = service
        .dispatcher()
        .handler_count(CustomerCreatedEvent::NAME)
        .unwrap_or(0);
    customers.push(service.create_customer(CustomerId::new("124"), "Luigi")?);

    service.dispatcher_mut().unregister_all();
    customers.push(service.create_customer(CustomerId::new("125"), "Peach")?);

    Ok(ScenarioReport {
        customers,
        created_handlers_after_unregister,
        registry_cleared: service.dispatcher().is_empty(),
    })
}
