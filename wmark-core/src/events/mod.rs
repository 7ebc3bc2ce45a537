//! Job lifecycle events and their dispatch.
//!
//! Each watermark job reports its lifecycle through a tagged event enum.
//! Handlers subscribe via the dispatcher and must tolerate interleaved
//! emission from concurrently running jobs; events for a single file always
//! arrive in causal order (started, progress, terminal).

use crate::discovery::MediaKind;

use std::sync::Arc;

pub mod json_handler;

/// Lifecycle notifications emitted while a watermark job runs.
#[derive(Debug, Clone)]
pub enum Event {
    /// A pipeline process was spawned for a file.
    JobStarted {
        filename: String,
        kind: MediaKind,
        /// The fully-expanded engine command line, for reproducibility.
        command: String,
    },

    /// Percent-complete for a video job. `None` means the engine reported
    /// progress but the total duration is unknown. Image jobs never emit
    /// this event.
    JobProgress {
        filename: String,
        percent: Option<f32>,
    },

    /// A raw engine output line, forwarded verbatim.
    EngineLog {
        filename: String,
        line: String,
    },

    /// The job finished and its output exists at the given path.
    JobCompleted {
        filename: String,
        output_path: String,
    },

    /// The job failed; sibling jobs are unaffected.
    JobFailed {
        filename: String,
        message: String,
    },
}

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}

pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: Event) {
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
