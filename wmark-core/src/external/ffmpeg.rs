//! FFmpeg command building and execution for watermark overlays
//!
//! This module builds the two-input overlay invocation (base media plus
//! watermark image) and runs it via ffmpeg-sidecar, translating engine
//! events into job lifecycle events.

use crate::discovery::MediaKind;
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventDispatcher};
use crate::position::Position;
use crate::utils::parse_ffmpeg_time;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use log::debug;

use std::path::{Path, PathBuf};

/// Parameters for a single watermark overlay invocation.
///
/// Created once per discovered file and consumed by exactly one pipeline
/// process; never reused or mutated.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub watermark_path: PathBuf,
    pub position: Position,
    pub kind: MediaKind,
}

impl JobSpec {
    /// The input filename used to tag this job's events.
    #[must_use]
    pub fn filename(&self) -> String {
        self.input_path.file_name().map_or_else(
            || self.input_path.display().to_string(),
            |name| name.to_string_lossy().to_string(),
        )
    }
}

/// Builds the argument list for one overlay invocation.
///
/// Both kinds composite the watermark over the base input with the
/// position's coordinate expressions. Images are capped to a single output
/// frame; videos keep their full duration and copy the audio stream
/// unmodified instead of re-encoding it.
#[must_use]
pub fn build_overlay_args(job: &JobSpec) -> Vec<String> {
    let mut args = vec![
        "-y".to_string(),
        "-i".to_string(),
        job.input_path.to_string_lossy().into_owned(),
        "-i".to_string(),
        job.watermark_path.to_string_lossy().into_owned(),
        "-filter_complex".to_string(),
        job.position.overlay_filter(),
    ];

    match job.kind {
        MediaKind::Image => {
            args.push("-frames:v".to_string());
            args.push("1".to_string());
        }
        MediaKind::Video => {
            args.push("-c:a".to_string());
            args.push("copy".to_string());
        }
    }

    args.push(job.output_path.to_string_lossy().into_owned());
    args
}

/// Renders the fully-expanded command line for diagnostics.
fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Reads the container duration of a video file in seconds.
///
/// A probe failure degrades progress reporting to the unknown marker rather
/// than failing the job.
#[must_use]
pub fn probe_duration(input_path: &Path) -> Option<f64> {
    match ffprobe::ffprobe(input_path) {
        Ok(info) => info
            .format
            .duration
            .as_deref()
            .and_then(|d| d.parse::<f64>().ok()),
        Err(e) => {
            debug!("ffprobe failed for {}: {e:?}", input_path.display());
            None
        }
    }
}

/// Runs one overlay job to completion, emitting lifecycle events.
///
/// Progress events are emitted for video jobs only, with the percentage
/// computed against `duration` when known. Engine output lines are
/// forwarded verbatim, tagged with the filename. On failure the
/// partially-written output file is removed so it is never mistaken for a
/// finished result.
///
/// # Arguments
///
/// * `job` - The overlay invocation to run
/// * `duration` - Probed container duration in seconds, if known
/// * `ffmpeg_path` - Optional binary override; `ffmpeg` on PATH otherwise
/// * `dispatcher` - Sink for this job's lifecycle events
pub fn run_overlay(
    job: &JobSpec,
    duration: Option<f64>,
    ffmpeg_path: Option<&Path>,
    dispatcher: &EventDispatcher,
) -> CoreResult<()> {
    let filename = job.filename();
    let args = build_overlay_args(job);
    let program = ffmpeg_path.map_or_else(|| "ffmpeg".to_string(), |p| p.display().to_string());

    dispatcher.emit(Event::JobStarted {
        filename: filename.clone(),
        kind: job.kind,
        command: render_command(&program, &args),
    });

    let mut cmd = match ffmpeg_path {
        Some(path) => FfmpegCommand::new_with_path(path),
        None => FfmpegCommand::new(),
    };
    cmd.args(args.iter().map(String::as_str));

    let mut child = cmd
        .spawn()
        .map_err(|e| CoreError::CommandStart(program, e))?;

    let mut stderr_tail = String::new();

    let events = child
        .iter()
        .map_err(|e| CoreError::CommandFailed("ffmpeg".to_string(), e.to_string()))?;

    for event in events {
        match event {
            FfmpegEvent::Progress(progress) => {
                // Images finish in one step and report no progress.
                if job.kind == MediaKind::Video {
                    let percent = duration.filter(|&d| d > 0.0).and_then(|d| {
                        parse_ffmpeg_time(&progress.time)
                            .map(|t| ((t / d) * 100.0).min(100.0) as f32)
                    });
                    dispatcher.emit(Event::JobProgress {
                        filename: filename.clone(),
                        percent,
                    });
                }
            }
            FfmpegEvent::Log(level, line) => {
                if matches!(level, LogLevel::Error | LogLevel::Fatal) {
                    stderr_tail.push_str(&line);
                    stderr_tail.push('\n');
                }
                dispatcher.emit(Event::EngineLog {
                    filename: filename.clone(),
                    line,
                });
            }
            FfmpegEvent::Error(line) => {
                stderr_tail.push_str(&line);
                stderr_tail.push('\n');
                dispatcher.emit(Event::EngineLog {
                    filename: filename.clone(),
                    line,
                });
            }
            _ => {}
        }
    }

    let status = child
        .wait()
        .map_err(|e| CoreError::CommandFailed("ffmpeg".to_string(), e.to_string()))?;

    if status.success() {
        dispatcher.emit(Event::JobCompleted {
            filename,
            output_path: job.output_path.display().to_string(),
        });
        Ok(())
    } else {
        // A half-written output must not survive a failed pipeline.
        if job.output_path.exists() {
            let _ = std::fs::remove_file(&job.output_path);
        }

        let message = if stderr_tail.trim().is_empty() {
            format!("ffmpeg exited with {status}")
        } else {
            format!("ffmpeg exited with {status}: {}", stderr_tail.trim())
        };
        dispatcher.emit(Event::JobFailed {
            filename,
            message: message.clone(),
        });
        Err(CoreError::CommandFailed("ffmpeg".to_string(), message))
    }
}
