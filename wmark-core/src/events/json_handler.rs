//! JSON run-log handler for structured event output
//!
//! This module provides a JSON-based event handler that writes one record
//! per lifecycle event, suitable for a run log file consumed by external
//! tooling.

use super::{Event, EventHandler};
use serde_json::json;
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Event handler that records lifecycle events as JSON lines.
///
/// The writer is shared by every worker thread, so records from concurrent
/// jobs interleave line-by-line but never mid-record.
pub struct JsonEventLog {
    output: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventLog {
    /// Create a new JSON event log over the given writer.
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            output: Mutex::new(writer),
        }
    }

    /// Flush buffered records to the underlying writer.
    ///
    /// Called once at run end, after the last job has reported.
    pub fn flush(&self) {
        if let Ok(mut output) = self.output.lock() {
            let _ = output.flush();
        }
    }

    /// Get current timestamp as seconds since Unix epoch
    fn get_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    /// Write a JSON record to the output
    fn write_json(&self, value: serde_json::Value) {
        if let Ok(mut output) = self.output.lock() {
            if let Ok(json_str) = serde_json::to_string(&value) {
                let _ = writeln!(output, "{}", json_str);
            }
        }
    }
}

impl EventHandler for JsonEventLog {
    fn handle(&self, event: &Event) {
        let timestamp = Self::get_timestamp();

        let record = match event {
            Event::JobStarted {
                filename,
                kind,
                command,
            } => json!({
                "type": "job_started",
                "file": filename,
                "kind": kind.to_string(),
                "command": command,
                "timestamp": timestamp
            }),

            Event::JobProgress { filename, percent } => json!({
                "type": "job_progress",
                "file": filename,
                "percent": percent,
                "timestamp": timestamp
            }),

            Event::EngineLog { filename, line } => json!({
                "type": "engine_log",
                "file": filename,
                "line": line,
                "timestamp": timestamp
            }),

            Event::JobCompleted {
                filename,
                output_path,
            } => json!({
                "type": "job_completed",
                "file": filename,
                "output": output_path,
                "timestamp": timestamp
            }),

            Event::JobFailed { filename, message } => json!({
                "type": "job_failed",
                "file": filename,
                "message": message,
                "timestamp": timestamp
            }),
        };

        self.write_json(record);
    }
}
