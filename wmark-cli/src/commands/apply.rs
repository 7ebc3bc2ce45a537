//! Implementation of the 'apply' subcommand.
//!
//! This module handles batch watermark application, including pre-flight
//! validation, file discovery, event handler wiring, and delegation to the
//! wmark-core library.

use crate::cli::ApplyArgs;
use crate::output::ConsoleEventHandler;
use crate::terminal;

use wmark_core::events::json_handler::JsonEventLog;
use wmark_core::{
    CoreConfig, CoreError, CoreResult, EventDispatcher, JobOutcome, JobStatus, PositionMode,
};

use log::{debug, info};

use std::fs::{self, File};
use std::io::BufWriter;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

/// Runs the watermarking process with the configured parameters and reports
/// results.
///
/// Configuration errors abort before any file is touched and before any
/// output directory is created. Per-file engine failures are reported as
/// they happen and aggregated into the final result, so a run with failures
/// exits non-zero even though sibling jobs completed.
pub fn run_apply(args: ApplyArgs) -> CoreResult<()> {
    let total_start_time = Instant::now();

    // An invalid mode aborts before any file is touched.
    let position = PositionMode::from_str(&args.position)?;

    let config = CoreConfig {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        watermark: args.watermark.clone(),
        position,
        jobs: args.jobs,
        ffmpeg_path: args.ffmpeg_path.clone(),
    };
    config.validate()?;

    let files = wmark_core::find_processable_files(&config.input_dir)?;

    terminal::print_section("DISCOVERY");
    terminal::print_status("Input directory", &config.input_dir.display().to_string(), false);
    terminal::print_status("Output directory", &config.output_dir.display().to_string(), false);
    terminal::print_status("Watermark", &config.watermark.display().to_string(), false);
    terminal::print_status("Position", &config.position.to_string(), false);
    terminal::print_status("Job limit", &config.jobs.to_string(), false);
    terminal::print_status("Files found", &files.len().to_string(), false);

    if files.is_empty() {
        info!(
            "No supported media files found in '{}'",
            config.input_dir.display()
        );
        return Ok(());
    }

    // Directories are created only once pre-flight validation has passed.
    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.join("logs"));
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            config.output_dir.display(),
            e
        ))
    })?;
    fs::create_dir_all(&log_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create log directory '{}': {}",
            log_dir.display(),
            e
        ))
    })?;

    // The run log lives for exactly one run: created here, flushed after
    // the last job reports.
    let run_log_path = log_dir.join(format!(
        "wmark_apply_run_{}.jsonl",
        crate::logging::get_timestamp()
    ));
    let run_log_file = File::create(&run_log_path)?;
    let run_log = Arc::new(JsonEventLog::with_writer(Box::new(BufWriter::new(
        run_log_file,
    ))));
    debug!("Run log file: {}", run_log_path.display());

    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_handler(Arc::new(ConsoleEventHandler::new()));
    dispatcher.add_handler(run_log.clone());

    terminal::print_section("PROCESSING");
    let outcomes = wmark_core::process_files(&config, &files, &dispatcher)?;
    run_log.flush();

    summarize(&outcomes, total_start_time)
}

/// Prints the run summary and folds per-job failures into the result.
fn summarize(outcomes: &[JobOutcome], total_start_time: Instant) -> CoreResult<()> {
    let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
    let failed = outcomes.len() - succeeded;

    terminal::print_section("SUMMARY");

    for outcome in outcomes {
        match &outcome.status {
            JobStatus::Completed { elapsed } => terminal::print_status(
                &outcome.filename,
                &format!(
                    "{} ({})",
                    outcome.output_path.display(),
                    wmark_core::format_duration(elapsed.as_secs_f64())
                ),
                false,
            ),
            JobStatus::Failed { message } => {
                terminal::print_status(&outcome.filename, message, true);
            }
        }
    }

    terminal::print_status("Processed", &outcomes.len().to_string(), false);
    terminal::print_status("Succeeded", &succeeded.to_string(), true);
    terminal::print_status("Failed", &failed.to_string(), failed > 0);
    terminal::print_status(
        "Total time",
        &wmark_core::format_duration(total_start_time.elapsed().as_secs_f64()),
        false,
    );

    if failed > 0 {
        // Per-file failures were already reported as they happened; the run
        // as a whole still exits non-zero.
        return Err(CoreError::OperationFailed(format!(
            "{failed} of {} job(s) failed",
            outcomes.len()
        )));
    }

    Ok(())
}
