//! Typed view of parsed log rows
//!
//! A parsed row maps positionally to timestamp, process id, stream, line
//! number and message text. Rows may be short; accessors return `None` for
//! absent trailing fields.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Sentinel written by agents when a log line has no associated process
pub const PID_NONE: &str = "None";

/// Output stream a log line was captured from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamKind {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
    /// Any other stream name
    Other(String),
}

impl From<&str> for StreamKind {
    fn from(s: &str) -> Self {
        match s {
            "stdout" => StreamKind::Stdout,
            "stderr" => StreamKind::Stderr,
            other => StreamKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => write!(f, "stdout"),
            StreamKind::Stderr => write!(f, "stderr"),
            StreamKind::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One log line with positional fields interpreted
///
/// Wraps the raw fields of a parsed row and exposes typed accessors. Field
/// presence is preserved: a row that carried only three fields reports
/// `None` for line number and message, while a row whose pid field holds the
/// `"None"` sentinel still counts that field as present.
///
/// # Examples
///
/// ```
/// use tasklog::record::LogRecord;
///
/// let record = LogRecord::from_fields(vec![
///     "2024-03-01T12:00:00.000000".to_string(),
///     "None".to_string(),
///     "stderr".to_string(),
///     "17".to_string(),
///     "warning: low disk space".to_string(),
/// ]);
///
/// assert!(record.timestamp().is_some());
/// assert_eq!(record.pid(), None);
/// assert_eq!(record.lineno(), Some(17));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogRecord {
    fields: Vec<String>,
    timestamp: Option<DateTime<Utc>>,
}

impl LogRecord {
    /// Build a record from the raw fields of one parsed row
    ///
    /// Never fails: an unparsable timestamp or line number simply reads back
    /// as `None`.
    pub fn from_fields(fields: Vec<String>) -> Self {
        let timestamp = fields.first().and_then(|raw| parse_utc_timestamp(raw));
        LogRecord { fields, timestamp }
    }

    /// Timestamp parsed from field 0, if present and valid
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Raw text of the timestamp field
    pub fn raw_timestamp(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Process id from field 1
    ///
    /// The literal `"None"` sentinel reads back as `None`, same as an absent
    /// field.
    pub fn pid(&self) -> Option<&str> {
        match self.fields.get(1).map(String::as_str) {
            Some(PID_NONE) | None => None,
            Some(pid) => Some(pid),
        }
    }

    /// Stream name from field 2
    pub fn stream(&self) -> Option<StreamKind> {
        self.fields.get(2).map(|s| StreamKind::from(s.as_str()))
    }

    /// Line number from field 3, if present and numeric
    pub fn lineno(&self) -> Option<u64> {
        self.fields.get(3).and_then(|s| s.parse().ok())
    }

    /// Message text from field 4
    pub fn message(&self) -> Option<&str> {
        self.fields.get(4).map(String::as_str)
    }

    /// Raw field at position `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields present in the source row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the source row carried no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw positional fields
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Parse a source timestamp as UTC
///
/// Agents write ISO-8601-like timestamps with the `Z` suffix omitted; both
/// `T` and space separators occur in the wild, with or without fractional
/// seconds.
fn parse_utc_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
