//! Reporters: external observers of stage events
//!
//! The crate's only contract toward reporting is that every activity exposes
//! a stable description and is reported as structured events. Two reporters
//! ship with the crate: an in-memory collector for assertions and a
//! newline-delimited JSON writer for external tooling.

use std::io::Write;

use parking_lot::Mutex;

use super::events::StageEvent;

/// Observes stage events as actors perform activities.
///
/// Implementations must never fail the activity being reported; a reporter
/// that cannot record an event logs and drops it.
pub trait Reporter: Send + Sync {
    /// Record one event.
    fn notify(&self, event: &StageEvent);
}

/// An in-memory reporter, useful for asserting on reported events.
#[derive(Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<StageEvent>>,
}

impl CollectingReporter {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in arrival order.
    pub fn events(&self) -> Vec<StageEvent> {
        self.events.lock().clone()
    }

    /// Rendered descriptions of the recorded events, in arrival order.
    pub fn descriptions(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|event| event.details().description.clone())
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn notify(&self, event: &StageEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Writes one JSON-encoded event per line to the wrapped writer.
pub struct JsonLineReporter<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineReporter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the writer, flushing buffered output.
    pub fn into_inner(self) -> W {
        let mut writer = self.writer.into_inner();
        let _ = writer.flush();
        writer
    }
}

impl<W: Write + Send> Reporter for JsonLineReporter<W> {
    fn notify(&self, event: &StageEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "dropping unserializable stage event");
                return;
            }
        };

        let mut writer = self.writer.lock();
        if let Err(err) = writeln!(writer, "{}", line) {
            tracing::warn!(error = %err, "dropping stage event the writer rejected");
        }
    }
}
