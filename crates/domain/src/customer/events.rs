//! Customer domain events.

use chrono::{DateTime, Utc};
use common::{CustomerId, EventId};
use dispatcher::Event;
use serde::{Deserialize, Serialize};

use super::{Address, Customer};

/// A customer was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedEvent {
    /// Unique id of this occurrence.
    pub event_id: EventId,

    /// When the event occurred.
    pub data_time_occurred: DateTime<Utc>,

    /// The created customer.
    pub event_data: CustomerCreatedData,
}

/// Data for CustomerCreatedEvent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    pub id: CustomerId,
    pub name: String,
}

impl CustomerCreatedEvent {
    /// Name handlers register under.
    pub const NAME: &'static str = "CustomerCreatedEvent";

    pub fn new(event_data: CustomerCreatedData) -> Self {
        Self {
            event_id: EventId::new(),
            data_time_occurred: Utc::now(),
            event_data,
        }
    }

    /// Creates the event for a freshly created customer.
    pub fn for_customer(customer: &Customer) -> Self {
        Self::new(CustomerCreatedData {
            id: customer.id().clone(),
            name: customer.name().to_string(),
        })
    }
}

impl Event for CustomerCreatedEvent {
    fn event_name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.data_time_occurred
    }
}

/// A customer's address was changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerChangeAddressEvent {
    /// Unique id of this occurrence.
    pub event_id: EventId,

    /// When the event occurred.
    pub data_time_occurred: DateTime<Utc>,

    /// The customer and its new address.
    pub event_data: CustomerChangeAddressData,
}

/// Data for CustomerChangeAddressEvent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerChangeAddressData {
    pub id: CustomerId,
    pub name: String,
    pub address: Address,
}

impl CustomerChangeAddressEvent {
    /// Name handlers register under.
    pub const NAME: &'static str = "CustomerChangeAddressEvent";

    pub fn new(event_data: CustomerChangeAddressData) -> Self {
        Self {
            event_id: EventId::new(),
            data_time_occurred: Utc::now(),
            event_data,
        }
    }

    /// Creates the event for a customer that moved to `address`.
    pub fn for_customer(customer: &Customer, address: Address) -> Self {
        Self::new(CustomerChangeAddressData {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            address,
        })
    }
}

impl Event for CustomerChangeAddressEvent {
    fn event_name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.data_time_occurred
    }
}
