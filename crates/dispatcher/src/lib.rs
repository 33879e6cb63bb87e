//! Synchronous in-process event dispatching.
//!
//! This crate provides the observer side of the domain model:
//! - [`Event`] trait for values that can be dispatched by name
//! - [`EventHandler`] trait for single-method handlers typed by the event they accept
//! - [`EventDispatcher`] registry mapping event names to ordered handler lists

pub mod dispatcher;
pub mod error;
pub mod event;

pub use dispatcher::{EventDispatcher, same_handler};
pub use error::{DispatchError, Result};
pub use event::{Event, EventHandler};
