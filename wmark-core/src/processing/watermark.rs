// ============================================================================
// wmark-core/src/processing/watermark.rs
// ============================================================================
//
// WATERMARK PROCESSING: Main Batch Orchestration
//
// This module houses the main batch orchestration logic for the wmark-core
// library. It plans one overlay job per discovered file and runs the jobs on
// a bounded worker pool, reporting lifecycle events per job.
//
// WORKFLOW:
// 1. Check that the external ffmpeg engine is invocable
// 2. Plan one job per file, resolving the overlay position per file
// 3. Run jobs on a worker pool bounded by the configured job limit:
//    a. Probe the container duration (videos only, for progress reporting)
//    b. Execute the overlay pipeline and forward its events
//    c. Record the outcome; a failed job never aborts its siblings

use crate::config::{CoreConfig, OUTPUT_PREFIX};
use crate::discovery::MediaKind;
use crate::error::{CoreError, CoreResult};
use crate::events::EventDispatcher;
use crate::external::ffmpeg::{self, JobSpec};
use crate::external::check_dependency;

use log::debug;
use rand::Rng;
use rayon::prelude::*;

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Terminal state of a single watermark job.
#[derive(Debug, Clone)]
pub enum JobStatus {
    Completed { elapsed: Duration },
    Failed { message: String },
}

/// Result of one watermark job.
///
/// Returned by `process_files` for every planned job, successful or not.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub filename: String,
    pub output_path: PathBuf,
    pub kind: MediaKind,
    pub status: JobStatus,
}

impl JobOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self.status, JobStatus::Completed { .. })
    }
}

/// Builds one job per input file.
///
/// The overlay position is resolved here, once per file, so random mode
/// draws independently for every file while a fixed mode yields the same
/// corner throughout the run. Output files take the `wm_` prefix and land
/// flat in the output directory.
pub fn plan_jobs<R: Rng + ?Sized>(
    config: &CoreConfig,
    files: &[PathBuf],
    rng: &mut R,
) -> CoreResult<Vec<JobSpec>> {
    files
        .iter()
        .map(|input_path| {
            let kind = MediaKind::from_path(input_path).ok_or_else(|| {
                CoreError::PathError(format!(
                    "Unsupported media file: {}",
                    input_path.display()
                ))
            })?;

            let filename = input_path.file_name().ok_or_else(|| {
                CoreError::PathError(format!(
                    "Failed to get filename for {}",
                    input_path.display()
                ))
            })?;
            let mut output_name = OsString::from(OUTPUT_PREFIX);
            output_name.push(filename);

            Ok(JobSpec {
                input_path: input_path.clone(),
                output_path: config.output_dir.join(output_name),
                watermark_path: config.watermark.clone(),
                position: config.position.resolve(rng),
                kind,
            })
        })
        .collect()
}

/// Processes a list of media files according to the provided configuration.
///
/// This is the main entry point for the wmark-core library. Jobs run on a
/// worker pool bounded by `config.jobs`, so at most that many ffmpeg
/// processes exist at once regardless of directory size. Events for one
/// file arrive in causal order (started, progress, terminal) because each
/// job occupies a single worker from start to finish; no ordering is
/// guaranteed across files.
///
/// Engine failures are confined to their job: the outcome records the
/// failure and sibling jobs keep running. Only configuration-level problems
/// (missing engine, zero-sized pool) abort the run.
///
/// # Arguments
///
/// * `config` - Run configuration containing paths and the job limit
/// * `files` - Paths of the media files to watermark
/// * `dispatcher` - Sink for job lifecycle events; handlers must tolerate
///   interleaved emission from concurrent jobs
pub fn process_files(
    config: &CoreConfig,
    files: &[PathBuf],
    dispatcher: &EventDispatcher,
) -> CoreResult<Vec<JobOutcome>> {
    check_dependency(config.ffmpeg_path.as_deref())?;

    let jobs = plan_jobs(config, files, &mut rand::thread_rng())?;
    debug!("Planned {} watermark job(s)", jobs.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to build worker pool: {e}")))?;

    let ffmpeg_path = config.ffmpeg_path.as_deref();

    let outcomes = pool.install(|| {
        jobs.par_iter()
            .map(|job| {
                let start = Instant::now();

                let duration = match job.kind {
                    MediaKind::Video => ffmpeg::probe_duration(&job.input_path),
                    MediaKind::Image => None,
                };

                let status = match ffmpeg::run_overlay(job, duration, ffmpeg_path, dispatcher) {
                    Ok(()) => JobStatus::Completed {
                        elapsed: start.elapsed(),
                    },
                    Err(e) => JobStatus::Failed {
                        message: e.to_string(),
                    },
                };

                JobOutcome {
                    filename: job.filename(),
                    output_path: job.output_path.clone(),
                    kind: job.kind,
                    status,
                }
            })
            .collect()
    });

    Ok(outcomes)
}
