//! Interactions with the external media-processing engine.
//!
//! This module encapsulates everything that touches the ffmpeg binary:
//! checking that it is invocable, building overlay command lines, and
//! running pipeline processes while translating their output into job
//! lifecycle events.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Contains overlay argument building and pipeline execution
pub mod ffmpeg;

pub use ffmpeg::{JobSpec, build_overlay_args, probe_duration, run_overlay};

/// Checks that the configured ffmpeg binary is present and executable.
///
/// Runs the binary with `-version`, distinguishing "not installed" from
/// "installed but failed to start".
///
/// # Arguments
///
/// * `ffmpeg_path` - Optional binary override; `ffmpeg` on PATH otherwise
pub(crate) fn check_dependency(ffmpeg_path: Option<&Path>) -> CoreResult<()> {
    let program = ffmpeg_path.map_or_else(|| "ffmpeg".to_string(), |p| p.display().to_string());

    let result = Command::new(&program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found media engine: {program}");
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Media engine '{program}' not found.");
                Err(CoreError::DependencyNotFound(program))
            } else {
                log::error!("Failed to start media engine check '{program}': {e}");
                Err(CoreError::CommandStart(program, e))
            }
        }
    }
}
