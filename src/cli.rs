use std::path::PathBuf;

use clap::Parser;

/// Submit one MPI batch job to a grid engine cluster, wait for it to finish,
/// print its output, and extract marker lines into a log file
#[derive(Debug, Parser)]
#[command(name = "qlaunch", version, about)]
pub struct Args {
    /// Pipeline installation directory (contains the worker script)
    pub install_path: PathBuf,

    /// Data file passed to the worker script
    pub data_file: PathBuf,

    /// Process definition file passed to the worker script
    pub process_file: PathBuf,

    /// Directory the job writes its results to
    pub out_path: PathBuf,

    /// Job name, also the stem of the scheduler output file
    pub out_name: String,

    /// Number of cluster nodes to request
    pub nodes: u32,

    /// CPUs per node, forwarded to the worker script
    pub cpus: u32,

    /// Queue to submit the job to
    #[arg(long, default_value = "medium.q")]
    pub queue: String,

    /// Parallel environment used to request execution slots
    #[arg(long, default_value = "openmpi")]
    pub pe: String,

    /// Seconds to sleep between checks for the job output file
    #[arg(long, default_value_t = 2)]
    pub poll_interval: u64,

    /// Give up waiting for job output after this many seconds
    #[arg(long, default_value_t = 86400)]
    pub max_wait: u64,
}
