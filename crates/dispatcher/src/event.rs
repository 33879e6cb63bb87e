//! Core event and handler traits.

use std::any::Any;

use chrono::{DateTime, Utc};

/// Trait for dispatchable events.
///
/// Events are value objects describing something that happened. They are
/// routed by [`Event::event_name`], which by convention is the type name
/// (e.g. `"CustomerCreatedEvent"`).
pub trait Event: Any + Send + Sync {
    /// Returns the name handlers are registered under.
    fn event_name(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// A handler invoked synchronously for each notified event of its type.
///
/// Handlers are shared with the dispatcher as `Arc<Self>`; the dispatcher
/// identifies a handler by that allocation, not by value.
pub trait EventHandler: Send + Sync {
    /// The type of events this handler accepts.
    type Event: Event;

    /// Handles a single event.
    fn handle(&self, event: &Self::Event);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping {
        at: DateTime<Utc>,
    }

    impl Event for Ping {
        fn event_name(&self) -> &'static str {
            "Ping"
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.at
        }
    }

    struct PingHandler;

    impl EventHandler for PingHandler {
        type Event = Ping;

        fn handle(&self, _event: &Ping) {}
    }

    // Compile-time check that the handler trait is object-safe
    #[allow(dead_code)]
    fn assert_handler_object_safe(_: &dyn EventHandler<Event = Ping>) {}

    #[test]
    fn event_exposes_name_and_timestamp() {
        let at = Utc::now();
        let event = Ping { at };
        assert_eq!(event.event_name(), "Ping");
        assert_eq!(event.occurred_at(), at);
    }

    #[test]
    fn handler_is_callable_through_trait_object() {
        let handler: Box<dyn EventHandler<Event = Ping>> = Box::new(PingHandler);
        handler.handle(&Ping { at: Utc::now() });
    }
}
