//! Loading task log files from disk with gzip support
//!
//! Finished logs are compressed in place, so a log addressed as `name` may
//! be stored as either `name` or `name.gz`. Loading resolves that the way
//! the master does: exact path first, then the gzipped variant.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{Result, TaskLogError};

/// Load a complete log payload into memory
///
/// Paths ending in `.gz` are decompressed transparently. For other paths the
/// uncompressed file is tried first and `<path>.gz` second. Invalid UTF-8 is
/// replaced rather than rejected.
///
/// # Examples
///
/// ```no_run
/// use tasklog::logfile;
/// use tasklog::delimited::LogParser;
///
/// let text = logfile::load("logs/agent1_0012_0345.csv").unwrap();
/// let rows = LogParser::new().parse(&text).unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if path.extension().is_some_and(|ext| ext == "gz") {
        return load_gzipped(path);
    }
    if path.is_file() {
        return load_plain(path);
    }

    let mut gz_path = PathBuf::from(path);
    gz_path.as_mut_os_string().push(".gz");
    if gz_path.is_file() {
        return load_gzipped(&gz_path);
    }

    Err(TaskLogError::ReadError(format!(
        "Log file not found: {}",
        path.display()
    )))
}

fn load_plain(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .map_err(|e| TaskLogError::ReadError(format!("Failed to open log file: {}", e)))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| TaskLogError::ReadError(format!("Failed to read log file: {}", e)))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

fn load_gzipped(path: &Path) -> Result<String> {
    let file = File::open(path)
        .map_err(|e| TaskLogError::ReadError(format!("Failed to open log file: {}", e)))?;
    let mut decoder = GzDecoder::new(file);
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .map_err(|e| TaskLogError::ReadError(format!("Failed to decompress log file: {}", e)))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
