use std::path::PathBuf;

use crate::cli::Args;

/// Cores available on each cluster node; slot requests are sized in cores
const CORES_PER_NODE: u64 = 12;

/// Worker script bundled with the pipeline installation. The scheduler runs
/// this script on the cluster, not the pipeline binary directly.
const WORKER_SCRIPT: &str = "mpi_job.sh";

/// Everything needed to build one qsub submission
pub struct JobSpec {
    pub name: String,
    pub queue: String,
    pub parallel_env: String,
    pub install_path: PathBuf,
    pub data_file: PathBuf,
    pub process_file: PathBuf,
    pub out_path: PathBuf,
    pub nodes: u32,
    pub cpus: u32,
}

impl JobSpec {
    /// Total execution slots to request: one slot per core across all nodes
    pub fn slots(&self) -> u64 {
        u64::from(self.nodes) * CORES_PER_NODE
    }

    pub fn worker_script(&self) -> PathBuf {
        self.install_path.join(WORKER_SCRIPT)
    }

    /// Argument vector for qsub
    ///
    /// `-sync y` blocks the submission until the job itself finishes, so a
    /// successful qsub exit covers the whole job lifetime. `-j y` joins the
    /// job's stdout and stderr into a single output file. After the worker
    /// script path come the script's own positional arguments.
    pub fn qsub_args(&self) -> Vec<String> {
        let mut args = vec![
            "-N".to_string(),
            self.name.clone(),
            "-sync".to_string(),
            "y".to_string(),
            "-j".to_string(),
            "y".to_string(),
            "-pe".to_string(),
            self.parallel_env.clone(),
            self.slots().to_string(),
            "-q".to_string(),
            self.queue.clone(),
            self.worker_script().to_string_lossy().into_owned(),
        ];
        for path in [
            &self.install_path,
            &self.data_file,
            &self.process_file,
            &self.out_path,
        ] {
            args.push(path.to_string_lossy().into_owned());
        }
        args.push(self.cpus.to_string());
        args
    }

    /// Scheduler output filename: job name, literal `.o`, job id. The file
    /// appears in the directory the job was submitted from.
    pub fn expected_output(&self, job_id: &str) -> PathBuf {
        PathBuf::from(format!("{}.o{}", self.name, job_id))
    }
}

impl From<&Args> for JobSpec {
    fn from(args: &Args) -> JobSpec {
        JobSpec {
            name: args.out_name.clone(),
            queue: args.queue.clone(),
            parallel_env: args.pe.clone(),
            install_path: args.install_path.clone(),
            data_file: args.data_file.clone(),
            process_file: args.process_file.clone(),
            out_path: args.out_path.clone(),
            nodes: args.nodes,
            cpus: args.cpus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobSpec {
        JobSpec {
            name: "run1".to_string(),
            queue: "medium.q".to_string(),
            parallel_env: "openmpi".to_string(),
            install_path: PathBuf::from("/apps/pipeline"),
            data_file: PathBuf::from("/data/scan.nxs"),
            process_file: PathBuf::from("/data/process.nxs"),
            out_path: PathBuf::from("/data/out"),
            nodes: 4,
            cpus: 12,
        }
    }

    #[test]
    fn slots_are_twelve_per_node() {
        assert_eq!(job().slots(), 48);

        let mut empty = job();
        empty.nodes = 0;
        assert_eq!(empty.slots(), 0);
    }

    #[test]
    fn output_filename_joins_name_and_id() {
        assert_eq!(
            job().expected_output("12345"),
            PathBuf::from("run1.o12345")
        );
    }

    #[test]
    fn qsub_args_request_a_synchronous_job() {
        let args = job().qsub_args();
        assert_eq!(
            args[..11],
            [
                "-N", "run1", "-sync", "y", "-j", "y", "-pe", "openmpi", "48", "-q", "medium.q"
            ]
        );
        assert_eq!(args[11], "/apps/pipeline/mpi_job.sh");
        // worker script arguments follow the script path
        assert_eq!(
            args[12..],
            ["/apps/pipeline", "/data/scan.nxs", "/data/process.nxs", "/data/out", "12"]
        );
    }
}
