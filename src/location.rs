//! Addressing of task logs within the job management API

use std::fmt;

/// Identifies one log of one task attempt
///
/// Retrieval itself is up to the caller; this type only knows how to
/// address the log.
///
/// # Examples
///
/// ```
/// use tasklog::location::LogLocation;
///
/// let location = LogLocation::new(12, 345, 1, "agent1_0012_0345.csv");
/// assert_eq!(
///     location.logfile_path(),
///     "/api/v1/jobs/12/tasks/345/attempts/1/logs/agent1_0012_0345.csv/logfile"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogLocation {
    /// Job the task belongs to
    pub job_id: u64,
    /// Task within the job
    pub task_id: u64,
    /// Attempt number, starting at 1
    pub attempt: u32,
    /// Identifier of the log file within the attempt
    pub log_identifier: String,
}

impl LogLocation {
    /// Create a new log location
    pub fn new(job_id: u64, task_id: u64, attempt: u32, log_identifier: impl Into<String>) -> Self {
        LogLocation {
            job_id,
            task_id,
            attempt,
            log_identifier: log_identifier.into(),
        }
    }

    /// API path serving the raw logfile payload
    pub fn logfile_path(&self) -> String {
        format!(
            "/api/v1/jobs/{}/tasks/{}/attempts/{}/logs/{}/logfile",
            self.job_id, self.task_id, self.attempt, self.log_identifier
        )
    }
}

impl fmt::Display for LogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "job {} task {} attempt {} log {}",
            self.job_id, self.task_id, self.attempt, self.log_identifier
        )
    }
}
