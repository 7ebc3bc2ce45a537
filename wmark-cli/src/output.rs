//! Console presentation of job lifecycle events.
//!
//! Translates core events into styled terminal lines. Raw engine output is
//! demoted to debug level so normal runs stay readable; the structured run
//! log keeps every line regardless.

use crate::terminal;

use log::{debug, info};
use wmark_core::{Event, EventHandler};

/// Event handler that renders lifecycle events for an interactive terminal.
#[derive(Debug, Clone, Default)]
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for ConsoleEventHandler {
    fn handle(&self, event: &Event) {
        match event {
            Event::JobStarted {
                filename,
                kind,
                command,
            } => {
                terminal::print_processing(&format!("Watermarking {kind}: {filename}"));
                info!("    command: {command}");
            }

            Event::JobProgress { filename, percent } => match percent {
                Some(percent) => info!("    {filename}: {percent:.1}%"),
                None => info!("    {filename}: ??%"),
            },

            Event::EngineLog { filename, line } => {
                debug!("[{filename}] {line}");
            }

            Event::JobCompleted {
                filename,
                output_path,
            } => {
                terminal::print_success(&format!("{filename} finished: {output_path}"));
            }

            Event::JobFailed { filename, message } => {
                terminal::print_error(&format!("{filename} failed: {message}"));
            }
        }
    }
}
