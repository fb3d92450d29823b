//! Run event stream
//!
//! A synthesis run reports progress through a one-way, fire-and-forget
//! event stream. Events carry no backpressure semantics; a sink that drops
//! them only loses observability, never correctness.

use std::sync::Mutex;

/// Severity attached to log events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// Cumulative counts reported at the end of a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub variables: usize,
    pub styles: usize,
    pub components: usize,
}

/// One event on the run stream
#[derive(Clone, Debug)]
pub enum SynthEvent {
    /// Stage progress, percent in 0..=100
    Progress { percent: u8, message: String },
    Log { level: LogLevel, message: String },
    /// Terminal success event
    Done { stats: RunStats },
    /// Terminal failure event (missing input payload)
    Error { message: String },
}

/// Consumer of the run event stream.
///
/// Object safe: stages hold a `&dyn EventSink`.
pub trait EventSink {
    fn emit(&self, event: SynthEvent);

    fn progress(&self, percent: u8, message: &str) {
        self.emit(SynthEvent::Progress {
            percent,
            message: message.to_string(),
        });
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.emit(SynthEvent::Log {
            level,
            message: message.to_string(),
        });
    }
}

/// Sink that forwards every event to `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: SynthEvent) {
        match event {
            SynthEvent::Progress { percent, message } => {
                tracing::debug!(percent, "{message}");
            }
            SynthEvent::Log { level, message } => match level {
                LogLevel::Info => tracing::info!("{message}"),
                LogLevel::Warning => tracing::warn!("{message}"),
                LogLevel::Error => tracing::error!("{message}"),
            },
            SynthEvent::Done { stats } => {
                tracing::info!(
                    variables = stats.variables,
                    styles = stats.styles,
                    components = stats.components,
                    "synthesis complete"
                );
            }
            SynthEvent::Error { message } => tracing::error!("{message}"),
        }
    }
}

/// Sink that collects events for later inspection (used by tests)
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SynthEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events emitted so far
    pub fn events(&self) -> Vec<SynthEvent> {
        self.events.lock().unwrap().clone()
    }

    /// All log messages at the given level
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                SynthEvent::Log { level: l, message } if *l == level => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// The terminal `Error` event's message, if one was emitted
    pub fn fatal_error(&self) -> Option<String> {
        self.events.lock().unwrap().iter().find_map(|e| match e {
            SynthEvent::Error { message } => Some(message.clone()),
            _ => None,
        })
    }

    /// The terminal `Done` stats, if the run completed
    pub fn done_stats(&self) -> Option<RunStats> {
        self.events.lock().unwrap().iter().find_map(|e| match e {
            SynthEvent::Done { stats } => Some(*stats),
            _ => None,
        })
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: SynthEvent) {
        self.events.lock().unwrap().push(event);
    }
}
