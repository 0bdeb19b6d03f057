use std::process::Command;

use log::{debug, info};
use thiserror::Error;

use crate::sge::job::JobSpec;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not run qsub: {0}")]
    SchedulerUnavailable(#[source] std::io::Error),
    #[error("scheduler rejected job ({status}): {stderr}")]
    SchedulerRejected { status: String, stderr: String },
}

/// Run qsub and block until the scheduler reports the job has finished.
///
/// Returns the capture of qsub's stdout, which starts with the submission
/// acknowledgment line. The capture lives in memory and is scoped to this
/// invocation, so concurrent runs do not collide on a shared temp file.
pub fn run_qsub(job: &JobSpec) -> Result<String, SubmitError> {
    let args = job.qsub_args();
    info!("Running qsub {}", args.join(" "));

    let output = Command::new("qsub")
        .args(&args)
        .output()
        .map_err(SubmitError::SchedulerUnavailable)?;

    let capture = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!("qsub capture: {capture}");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(SubmitError::SchedulerRejected {
            status: output.status.to_string(),
            stderr,
        });
    }

    Ok(capture)
}
