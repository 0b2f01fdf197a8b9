// Debug event side channel for completion runs

use std::sync::Mutex;

/// Something noteworthy that happened while completing a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugEvent {
    /// A raw line arrived from the shell.
    LineReceived { line: String },
    /// The previous word is a flag expecting a value; its predictor decides alone.
    FlagValue { flag: String },
    /// A completed word selected a sub-command.
    SubcommandMatched { name: String, index: usize },
    /// Outcome of the final prefix filter for one candidate.
    CandidateFiltered { candidate: String, accepted: bool },
    /// Candidates handed back to the shell.
    Completion { candidates: Vec<String> },
}

/// Receives debug events from the engine.
pub trait DebugSink: Send + Sync {
    fn record(&self, event: &DebugEvent);
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn record(&self, event: &DebugEvent) {
        match event {
            DebugEvent::LineReceived { line } => {
                tracing::debug!(line = %line, "Completing line");
            }
            DebugEvent::FlagValue { flag } => {
                tracing::debug!(flag = %flag, "Predicting according to flag");
            }
            DebugEvent::SubcommandMatched { name, index } => {
                tracing::debug!(sub = %name, index = *index, "Descending into sub command");
            }
            DebugEvent::CandidateFiltered { candidate, accepted } => {
                tracing::trace!(candidate = %candidate, accepted = *accepted, "Filtered candidate");
            }
            DebugEvent::Completion { candidates } => {
                tracing::debug!(count = candidates.len(), ?candidates, "Completion");
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn record(&self, _event: &DebugEvent) {}
}

/// Keeps events in memory so they can be inspected afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DebugEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DebugEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl DebugSink for MemorySink {
    fn record(&self, event: &DebugEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
