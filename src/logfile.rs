//! Extract marker lines from the job output into a log file

use std::path::{Path, PathBuf};
use std::{fs, io};

use log::info;

/// Lines containing this marker are copied into the log file
const MARKER: &str = "L ";

/// Prefix added to the job output filename to name the log file
const LOG_PREFIX: &str = "log_";

/// Write the marker lines of the job output to `log_<output filename>`,
/// next to the output file.
///
/// Lines are kept verbatim and in their original order. The log file is
/// written even when nothing matches, so a run always leaves the same file
/// behind and a rerun produces identical content.
pub fn extract(output_path: &Path, contents: &str) -> io::Result<PathBuf> {
    let log_path = log_path_for(output_path);

    let matches: Vec<&str> = contents.lines().filter(|line| line.contains(MARKER)).collect();
    info!(
        "Writing {} marker lines to {}",
        matches.len(),
        log_path.display()
    );

    let mut body = matches.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(&log_path, body)?;

    Ok(log_path)
}

fn log_path_for(output_path: &Path) -> PathBuf {
    let name = output_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    output_path.with_file_name(format!("{LOG_PREFIX}{name}"))
}
