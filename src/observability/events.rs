//! Observable events
//!
//! Events are explicit and typed; each carries the severity it is logged at.

use std::fmt;

use super::logger::Severity;

/// Observable events in storekeeper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Requests
    /// A request finished (any status)
    RequestComplete,

    // Records
    /// A record was appended to a table
    RecordAppended,
    /// A request body was refused before reaching the store
    RecordRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RecordAppended => "RECORD_APPENDED",
            Event::RecordRejected => "RECORD_REJECTED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestComplete | Event::RecordAppended => Severity::Trace,
            Event::RecordRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
