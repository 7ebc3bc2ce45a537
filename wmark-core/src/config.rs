//! Configuration structures and constants for the wmark-core library.
//!
//! This module provides the configuration for a watermarking run: paths,
//! overlay position mode, and the worker pool bound. The configuration is
//! built by the consumer (e.g. wmark-cli) and passed into `process_files`;
//! there is no process-wide configuration state.

use crate::error::{CoreError, CoreResult};
use crate::position::PositionMode;

use std::path::PathBuf;

// Default constants

/// Default upper bound on concurrently running ffmpeg processes.
///
/// Each job spawns a full decode/composite/encode pipeline, so the default
/// is deliberately small.
pub const DEFAULT_JOB_LIMIT: usize = 2;

/// Prefix prepended to every output filename.
pub const OUTPUT_PREFIX: &str = "wm_";

/// Main configuration structure for the wmark-core library.
///
/// # Examples
///
/// ```rust,no_run
/// use wmark_core::CoreConfig;
/// use std::path::PathBuf;
///
/// let config = CoreConfig::new(
///     PathBuf::from("/path/to/input"),
///     PathBuf::from("/path/to/output"),
///     PathBuf::from("/path/to/logo.png"),
/// );
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory containing input media files to process
    pub input_dir: PathBuf,

    /// Directory where watermarked output files will be saved
    pub output_dir: PathBuf,

    /// Watermark image composited onto every output
    pub watermark: PathBuf,

    /// Overlay placement strategy (fixed corner or random per file)
    pub position: PositionMode,

    /// Upper bound on concurrently running ffmpeg processes
    pub jobs: usize,

    /// Optional override for the ffmpeg binary (defaults to `ffmpeg` on PATH)
    pub ffmpeg_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Creates a configuration with the required paths and default settings.
    #[must_use]
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, watermark: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            watermark,
            position: PositionMode::default(),
            jobs: DEFAULT_JOB_LIMIT,
            ffmpeg_path: None,
        }
    }

    /// Validates the configuration before any job starts.
    ///
    /// Configuration errors are fatal: the run aborts without touching any
    /// file.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.input_dir.is_dir() {
            return Err(CoreError::PathError(format!(
                "Input directory '{}' not found",
                self.input_dir.display()
            )));
        }

        if !self.watermark.is_file() {
            return Err(CoreError::InvalidConfig(format!(
                "Watermark file '{}' not found",
                self.watermark.display()
            )));
        }

        if self.jobs == 0 {
            return Err(CoreError::InvalidConfig(
                "Job limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
