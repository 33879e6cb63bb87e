//! Customer service publishing domain events for customer operations.

use std::sync::Arc;

use common::CustomerId;
use dispatcher::EventDispatcher;

use super::{
    Address, Customer, CustomerChangeAddressEvent, CustomerCreatedEvent, CustomerError,
    SendConsoleLog1Handler, SendConsoleLog2Handler, SendConsoleLogHandler,
};

/// Service for customer operations.
///
/// Applies each change to the customer entity and then notifies the owned
/// dispatcher with the matching event.
#[derive(Debug, Default)]
pub struct CustomerService {
    dispatcher: EventDispatcher,
}

impl CustomerService {
    /// Creates a service that notifies through `dispatcher`.
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Creates a service with the console-log handlers registered:
    /// two for CustomerCreatedEvent and one for CustomerChangeAddressEvent.
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(CustomerCreatedEvent::NAME, Arc::new(SendConsoleLog1Handler));
        dispatcher.register(CustomerCreatedEvent::NAME, Arc::new(SendConsoleLog2Handler));
        dispatcher.register(
            CustomerChangeAddressEvent::NAME,
            Arc::new(SendConsoleLogHandler),
        );
        Self::new(dispatcher)
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    /// Creates a customer and notifies CustomerCreatedEvent.
    #[tracing::instrument(skip(self))]
    pub fn create_customer(&self, id: CustomerId, name: &str) -> Result<Customer, CustomerError> {
        let customer = Customer::new(id, name)?;
        metrics::counter!("customers_created").increment(1);
        self.dispatcher
            .notify(&CustomerCreatedEvent::for_customer(&customer));
        Ok(customer)
    }

    /// Changes a customer's address and notifies CustomerChangeAddressEvent.
    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    pub fn change_address(&self, customer: &mut Customer, address: Address) {
        customer.change_address(address.clone());
        metrics::counter!("customer_address_changes").increment(1);
        self.dispatcher
            .notify(&CustomerChangeAddressEvent::for_customer(customer, address));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_handlers_are_registered() {
        let service = CustomerService::with_default_handlers();
        let dispatcher = service.dispatcher();

        assert_eq!(dispatcher.handler_count(CustomerCreatedEvent::NAME), Some(2));
        assert_eq!(
            dispatcher.handler_count(CustomerChangeAddressEvent::NAME),
            Some(1)
        );

        let names = dispatcher.handler_names(CustomerCreatedEvent::NAME).unwrap();
        assert!(names[0].ends_with("SendConsoleLog1Handler"));
        assert!(names[1].ends_with("SendConsoleLog2Handler"));
    }

    #[test]
    fn test_create_customer_validates() {
        let service = CustomerService::default();
        let err = service.create_customer(CustomerId::new(""), "John").unwrap_err();
        assert_eq!(err, CustomerError::IdRequired);
    }

    #[test]
    fn test_change_address_updates_customer() {
        let service = CustomerService::default();
        let mut customer = service.create_customer(CustomerId::new("1"), "John").unwrap();
        let address = Address::new("Street", 1, "12345", "City").unwrap();

        service.change_address(&mut customer, address.clone());

        assert_eq!(customer.address(), Some(&address));
    }

    #[test]
    fn test_dispatcher_mut_allows_clearing() {
        let mut service = CustomerService::with_default_handlers();
        service.dispatcher_mut().unregister_all();
        assert!(service.dispatcher().is_empty());
    }
}
