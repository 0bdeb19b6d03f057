use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::cli::Args;
use crate::sge::job::JobSpec;
use crate::sge::{ack, submit};

mod cli;
mod logfile;
mod sge;
mod watch;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let job = JobSpec::from(&args);
    info!(
        "Submitting job {} to queue {} ({} slots)",
        job.name,
        job.queue,
        job.slots()
    );

    let capture = submit::run_qsub(&job).context("job submission failed")?;
    let job_id = ack::parse_job_id(&capture).context("could not determine job id")?;
    info!("Scheduler assigned job id {job_id}");

    let output_path = job.expected_output(&job_id);
    let contents = watch::wait_for_output(&output_path, args.poll_interval, args.max_wait)
        .context("no job output to collect")?;
    print!("{contents}");

    let log_path = logfile::extract(&output_path, &contents)
        .with_context(|| format!("could not write log for {}", output_path.display()))?;
    println!("{}", log_path.display());

    Ok(())
}
