//! Event dispatcher mapping event names to ordered handler lists.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DispatchError, Result};
use crate::event::{Event, EventHandler};

/// Returns true if both `Arc`s point at the same handler instance.
///
/// Only the data address is compared, so a concrete `Arc<H>` and the
/// `Arc<dyn EventHandler>` it was coerced into compare equal.
pub fn same_handler<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// A single handler entry in a registry list.
struct Registration {
    /// Type name of the handler, for logs and inspection.
    handler_name: &'static str,

    /// An `Arc<dyn EventHandler<Event = E>>` for the handler's event type.
    handler: Box<dyn Any + Send + Sync>,
}

impl Registration {
    fn new<E: Event>(
        handler_name: &'static str,
        handler: Arc<dyn EventHandler<Event = E>>,
    ) -> Self {
        Self {
            handler_name,
            handler: Box::new(handler),
        }
    }

    /// Returns the handler if it accepts events of type `E`.
    fn downcast<E: Event>(&self) -> Option<&Arc<dyn EventHandler<Event = E>>> {
        self.handler.downcast_ref()
    }

    fn is<H: EventHandler + ?Sized>(&self, handler: &Arc<H>) -> bool {
        self.downcast::<H::Event>()
            .is_some_and(|registered| same_handler(registered, handler))
    }
}

/// Registry of event handlers keyed by event name.
///
/// Handlers run synchronously on the caller's thread, in the order they were
/// registered. Registering the same instance twice yields two entries and two
/// invocations per notification.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Registration>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler to the list for `event_name`, creating the list if absent.
    pub fn register<H>(&mut self, event_name: impl Into<String>, handler: Arc<H>)
    where
        H: EventHandler + 'static,
    {
        let handler: Arc<dyn EventHandler<Event = H::Event>> = handler;
        self.push(event_name.into(), std::any::type_name::<H>(), handler);
    }

    /// Appends an already type-erased handler to the list for `event_name`.
    pub fn register_dyn<E: Event>(
        &mut self,
        event_name: impl Into<String>,
        handler: Arc<dyn EventHandler<Event = E>>,
    ) {
        let handler_name = std::any::type_name::<dyn EventHandler<Event = E>>();
        self.push(event_name.into(), handler_name, handler);
    }

    fn push<E: Event>(
        &mut self,
        event_name: String,
        handler_name: &'static str,
        handler: Arc<dyn EventHandler<Event = E>>,
    ) {
        let list = self.handlers.entry(event_name.clone()).or_default();
        list.push(Registration::new(handler_name, handler));

        tracing::debug!(
            event = %event_name,
            handler = handler_name,
            handlers = list.len(),
            "handler registered"
        );
        metrics::counter!("dispatcher_handlers_registered").increment(1);
    }

    /// Removes the first registration of `handler` under `event_name`.
    ///
    /// Does nothing if the event name or the handler is unknown. The list for
    /// `event_name` stays defined even when it becomes empty.
    pub fn unregister<H>(&mut self, event_name: &str, handler: &Arc<H>)
    where
        H: EventHandler + ?Sized,
    {
        if let Err(err) = self.try_unregister(event_name, handler) {
            tracing::debug!(error = %err, "unregister ignored");
        }
    }

    /// Removes the first registration of `handler` under `event_name`,
    /// reporting unknown events or handlers as errors.
    pub fn try_unregister<H>(&mut self, event_name: &str, handler: &Arc<H>) -> Result<()>
    where
        H: EventHandler + ?Sized,
    {
        let list = self
            .handlers
            .get_mut(event_name)
            .ok_or_else(|| DispatchError::NoSuchEvent {
                event_name: event_name.to_string(),
            })?;

        let index = list
            .iter()
            .position(|registration| registration.is(handler))
            .ok_or_else(|| DispatchError::HandlerNotRegistered {
                event_name: event_name.to_string(),
                handler: std::any::type_name::<H>(),
            })?;

        let removed = list.remove(index);
        tracing::debug!(
            event = event_name,
            handler = removed.handler_name,
            handlers = list.len(),
            "handler unregistered"
        );
        Ok(())
    }

    /// Drops every handler list. Previously registered event names become absent.
    pub fn unregister_all(&mut self) {
        let events = self.handlers.len();
        self.handlers = HashMap::new();
        tracing::debug!(events, "all handlers unregistered");
    }

    /// Invokes every handler registered under the event's name, in order.
    ///
    /// Does nothing if no list exists for the event name.
    pub fn notify<E: Event>(&self, event: &E) {
        if let Err(err) = self.try_notify(event) {
            tracing::trace!(error = %err, "notify ignored");
        }
    }

    /// Invokes every handler registered under the event's name, in order,
    /// and returns how many handlers ran.
    ///
    /// Registrations under the name whose handler accepts a different event
    /// type are skipped.
    pub fn try_notify<E: Event>(&self, event: &E) -> Result<usize> {
        let event_name = event.event_name();
        let list = self
            .handlers
            .get(event_name)
            .ok_or_else(|| DispatchError::NoSuchEvent {
                event_name: event_name.to_string(),
            })?;

        metrics::counter!("dispatcher_events_notified", "event" => event_name).increment(1);

        let mut invoked = 0;
        for registration in list {
            match registration.downcast::<E>() {
                Some(handler) => {
                    tracing::trace!(
                        event = event_name,
                        handler = registration.handler_name,
                        "invoking handler"
                    );
                    handler.handle(event);
                    invoked += 1;
                }
                None => {
                    tracing::warn!(
                        event = event_name,
                        handler = registration.handler_name,
                        expected = std::any::type_name::<E>(),
                        "handler does not accept this event type, skipping"
                    );
                }
            }
        }

        metrics::counter!("dispatcher_handlers_invoked", "event" => event_name)
            .increment(invoked as u64);

        Ok(invoked)
    }

    /// Returns the handlers registered under `event_name` that accept `E`,
    /// in registration order, or `None` if the name is absent.
    pub fn event_handlers<E: Event>(
        &self,
        event_name: &str,
    ) -> Option<Vec<Arc<dyn EventHandler<Event = E>>>> {
        self.handlers.get(event_name).map(|list| {
            list.iter()
                .filter_map(|registration| registration.downcast::<E>().cloned())
                .collect()
        })
    }

    /// Returns the number of registrations under `event_name`, or `None` if absent.
    pub fn handler_count(&self, event_name: &str) -> Option<usize> {
        self.handlers.get(event_name).map(Vec::len)
    }

    /// Returns handler type names under `event_name` in registration order.
    pub fn handler_names(&self, event_name: &str) -> Option<Vec<&'static str>> {
        self.handlers.get(event_name).map(|list| {
            list.iter()
                .map(|registration| registration.handler_name)
                .collect()
        })
    }

    /// Returns true if `handler` is registered at least once under `event_name`.
    pub fn contains<H>(&self, event_name: &str, handler: &Arc<H>) -> bool
    where
        H: EventHandler + ?Sized,
    {
        self.handlers
            .get(event_name)
            .is_some_and(|list| list.iter().any(|registration| registration.is(handler)))
    }

    /// Returns the event names that currently have a handler list.
    pub fn event_names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Returns true if no event name has a handler list.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (event_name, list) in &self.handlers {
            let names: Vec<_> = list.iter().map(|r| r.handler_name).collect();
            map.entry(event_name, &names);
        }
        map.finish()
    }
}
