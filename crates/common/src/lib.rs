//! Shared identifier types.

mod types;

pub use types::{CustomerId, EventId};
