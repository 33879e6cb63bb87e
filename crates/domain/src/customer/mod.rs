//! Customer entity, its events, and their handlers.

mod entity;
mod events;
mod handlers;
mod service;
mod value_objects;

pub use entity::Customer;
pub use events::{
    CustomerChangeAddressData, CustomerChangeAddressEvent, CustomerCreatedData,
    CustomerCreatedEvent,
};
pub use handlers::{SendConsoleLog1Handler, SendConsoleLog2Handler, SendConsoleLogHandler};
pub use service::CustomerService;
pub use value_objects::Address;

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// Customer ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Customer name is required.
    #[error("Name is required")]
    NameRequired,

    /// An address must be set before the customer can be activated.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    /// An address field is missing or out of range.
    #[error("Invalid address: {field} is required")]
    InvalidAddress { field: &'static str },
}
