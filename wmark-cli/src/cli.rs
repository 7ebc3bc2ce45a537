// wmark-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Wmark: Batch watermarking tool",
    long_about = "Applies an image watermark to every supported media file in a directory using ffmpeg via the wmark-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watermarks every supported media file in an input directory
    Apply(ApplyArgs),
}

#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Directory containing the media files to watermark
    #[arg(required = true, value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory where watermarked files will be saved
    #[arg(required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Watermark image composited onto every output
    #[arg(required = true, value_name = "WATERMARK")]
    pub watermark: PathBuf,

    /// Overlay corner: tl, tr, bl, br, or random (drawn per file)
    #[arg(short, long, value_name = "MODE", default_value = "random")]
    pub position: String,

    /// Maximum number of concurrently running ffmpeg processes
    #[arg(short, long, value_name = "N", default_value_t = wmark_core::DEFAULT_JOB_LIMIT)]
    pub jobs: usize,

    /// Optional: path to the ffmpeg binary (defaults to ffmpeg on PATH)
    /// Can also be set via the WMARK_FFMPEG_PATH environment variable.
    #[arg(long, value_name = "PATH", env = "WMARK_FFMPEG_PATH")]
    pub ffmpeg_path: Option<PathBuf>,

    /// Optional: directory for run log files (defaults to OUTPUT_DIR/logs)
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
