//! Core library for batch watermark overlay orchestration using ffmpeg.
//!
//! This crate provides media file discovery, overlay position resolution,
//! ffmpeg pipeline construction, and per-job lifecycle event reporting.
//! The actual decode, composite, and encode work is delegated to an
//! external ffmpeg process per file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use wmark_core::{CoreConfig, EventDispatcher, find_processable_files, process_files};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/input"),
//!     PathBuf::from("/path/to/output"),
//!     PathBuf::from("/path/to/logo.png"),
//! );
//! config.validate().unwrap();
//!
//! let files = find_processable_files(&config.input_dir).unwrap();
//! let dispatcher = EventDispatcher::new();
//! let outcomes = process_files(&config, &files, &dispatcher).unwrap();
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod events;
pub mod external;
pub mod position;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, DEFAULT_JOB_LIMIT, OUTPUT_PREFIX};
pub use discovery::{MediaKind, find_processable_files};
pub use error::{CoreError, CoreResult};
pub use events::{Event, EventDispatcher, EventHandler};
pub use external::ffmpeg::{JobSpec, build_overlay_args};
pub use position::{Position, PositionMode};
pub use processing::{JobOutcome, JobStatus, plan_jobs, process_files};
pub use utils::{format_duration, parse_ffmpeg_time};
