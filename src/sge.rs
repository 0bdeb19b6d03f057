//! Build grid engine submissions and parse the scheduler's response

/// Job parameters and qsub argument construction
pub mod job;

/// Extract the job id from the submission acknowledgment
pub mod ack;

/// Synchronous qsub invocation
pub mod submit;
