//! Poll for the job output file on the shared filesystem

use std::path::Path;
use std::thread;
use std::time::Duration;
use std::{fs, io};

use chrono::{Local, TimeDelta};
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("job output {path} did not appear within {waited}s")]
    JobTimedOut { path: String, waited: u64 },
    #[error("could not read job output {path}: {source}")]
    OutputUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Wait for the job output file and return its contents once it exists.
///
/// The scheduler writes the file from a cluster node, so existence is the
/// only readiness signal available here. Checks run every `poll_interval`
/// seconds until `max_wait` seconds have passed.
pub fn wait_for_output(path: &Path, poll_interval: u64, max_wait: u64) -> Result<String, WatchError> {
    let deadline = Local::now() + TimeDelta::seconds(max_wait as i64);
    info!(
        "Waiting for job output {} (checking every {poll_interval}s, max {max_wait}s)",
        path.display()
    );

    while !path.exists() {
        if Local::now() >= deadline {
            return Err(WatchError::JobTimedOut {
                path: path.display().to_string(),
                waited: max_wait,
            });
        }
        debug!("{} not there yet", path.display());
        thread::sleep(Duration::from_secs(poll_interval));
    }

    fs::read_to_string(path).map_err(|source| WatchError::OutputUnreadable {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn returns_contents_once_the_file_exists() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("run1.o12345");
        let mut file = File::create(&path).expect("output file");
        writeln!(file, "L 2").expect("written");

        let contents = wait_for_output(&path, 1, 10).expect("file exists");
        assert_eq!(contents, "L 2\n");
    }

    #[test]
    fn times_out_when_the_file_never_appears() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("run1.o99999");

        let err = wait_for_output(&path, 0, 0).unwrap_err();
        assert!(matches!(err, WatchError::JobTimedOut { waited: 0, .. }));
    }
}
