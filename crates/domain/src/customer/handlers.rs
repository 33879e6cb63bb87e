//! Console-log handlers for customer events.
//!
//! Each handler writes one line to stdout per event and emits a matching
//! tracing event.

use dispatcher::EventHandler;

use super::{CustomerChangeAddressEvent, CustomerCreatedEvent};

/// First console-log handler for CustomerCreatedEvent.
#[derive(Debug, Default)]
pub struct SendConsoleLog1Handler;

impl SendConsoleLog1Handler {
    pub fn message(&self, _event: &CustomerCreatedEvent) -> String {
        "This is the first console.log of the event: CustomerCreated".to_string()
    }
}

impl EventHandler for SendConsoleLog1Handler {
    type Event = CustomerCreatedEvent;

    fn handle(&self, event: &CustomerCreatedEvent) {
        println!("{}", self.message(event));
        tracing::info!(
            event_id = %event.event_id,
            customer_id = %event.event_data.id,
            "console log 1 sent"
        );
    }
}

/// Second console-log handler for CustomerCreatedEvent.
#[derive(Debug, Default)]
pub struct SendConsoleLog2Handler;

impl SendConsoleLog2Handler {
    pub fn message(&self, _event: &CustomerCreatedEvent) -> String {
        "This is the second console.log of the event: CustomerCreated".to_string()
    }
}

impl EventHandler for SendConsoleLog2Handler {
    type Event = CustomerCreatedEvent;

    fn handle(&self, event: &CustomerCreatedEvent) {
        println!("{}", self.message(event));
        tracing::info!(
            event_id = %event.event_id,
            customer_id = %event.event_data.id,
            "console log 2 sent"
        );
    }
}

/// Console-log handler for CustomerChangeAddressEvent.
#[derive(Debug, Default)]
pub struct SendConsoleLogHandler;

impl SendConsoleLogHandler {
    /// Formats `Customer address: {id}, {name} changed to: {address}`.
    pub fn message(&self, event: &CustomerChangeAddressEvent) -> String {
        let data = &event.event_data;
        format!(
            "Customer address: {}, {} changed to: {}",
            data.id, data.name, data.address
        )
    }
}

impl EventHandler for SendConsoleLogHandler {
    type Event = CustomerChangeAddressEvent;

    fn handle(&self, event: &CustomerChangeAddressEvent) {
        println!("{}", self.message(event));
        tracing::info!(
            event_id = %event.event_id,
            customer_id = %event.event_data.id,
            address = %event.event_data.address,
            "address change logged"
        );
    }
}
