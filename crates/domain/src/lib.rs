//! Customer domain layer.
//!
//! This crate provides the customer side of the system:
//! - Customer entity and Address value object with validation
//! - CustomerCreatedEvent and CustomerChangeAddressEvent
//! - Console-log handlers for both events
//! - CustomerService publishing events through an [`dispatcher::EventDispatcher`]

pub mod customer;

pub use customer::{
    Address, Customer, CustomerChangeAddressData, CustomerChangeAddressEvent, CustomerCreatedData,
    CustomerCreatedEvent, CustomerError, CustomerService, SendConsoleLog1Handler,
    SendConsoleLog2Handler, SendConsoleLogHandler,
};
