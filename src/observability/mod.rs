//! Observability for storekeeper
//!
//! Structured JSON logging plus a typed set of lifecycle and request events.
//!
//! ```ignore
//! use storekeeper::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::Serving, &[("addr", "127.0.0.1:5000")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Configure the log threshold: TRACE in debug mode, INFO otherwise.
pub fn init(debug: bool) {
    let severity = if debug { Severity::Trace } else { Severity::Info };
    Logger::set_min_severity(severity);
}
