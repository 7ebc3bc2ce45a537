//! Batch orchestration of watermark jobs.

mod watermark;

pub use watermark::{JobOutcome, JobStatus, plan_jobs, process_files};
