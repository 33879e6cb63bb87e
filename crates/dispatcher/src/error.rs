use thiserror::Error;

/// Errors reported by the strict dispatcher operations.
///
/// The plain operations (`unregister`, `notify`) treat these cases as silent
/// no-ops; `try_unregister` and `try_notify` surface them instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No handler list exists for the event name.
    #[error("No handlers registered for event: {event_name}")]
    NoSuchEvent { event_name: String },

    /// The handler list exists but does not contain the given handler.
    #[error("Handler {handler} is not registered for event: {event_name}")]
    HandlerNotRegistered {
        event_name: String,
        handler: &'static str,
    },
}

/// Result type for strict dispatcher operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
