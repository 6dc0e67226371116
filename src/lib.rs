//! # tasklog
//!
//! Parsing, typing and HTML rendering for task log files in the quoted
//! delimited format written by render-farm agents.
//!
//! A log file holds one line per captured output line, with five positional
//! fields: timestamp (UTC, `Z` suffix omitted), process id (`None` when
//! absent), stream name, line number and message text. Fields containing
//! commas, quotes or newlines are wrapped in double quotes with embedded
//! quotes doubled.
//!
//! # Examples
//!
//! ```
//! use tasklog::delimited::LogParser;
//! use tasklog::record::LogRecord;
//! use tasklog::render::HtmlTableRenderer;
//!
//! let payload = "2024-03-01T12:00:00.000000,100,stdout,1,hello\n";
//!
//! let rows = LogParser::new().parse(payload).unwrap();
//! let records: Vec<LogRecord> = rows.into_iter().map(LogRecord::from_fields).collect();
//!
//! let html = HtmlTableRenderer::new().render_table(&records);
//! assert!(html.contains("<td class=\"text\" title=\"Text\">hello</td>"));
//! ```

pub mod delimited;
pub mod error;
pub mod location;
pub mod logfile;
pub mod record;
pub mod render;

pub use delimited::{LogEncoder, LogParser};
pub use error::{Result, TaskLogError};
pub use location::LogLocation;
pub use record::{LogRecord, StreamKind};
pub use render::{HtmlTableRenderer, RenderOptions};
