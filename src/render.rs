//! HTML table rendering for parsed task logs
//!
//! Renders typed records as `<tr>` rows with one cell per positional field,
//! localizing the timestamp to a configured timezone. Short rows render
//! fewer cells; absent trailing fields are skipped entirely.

use std::fmt::Write as _;

use chrono::FixedOffset;

use crate::record::LogRecord;

/// Display configuration for rendered log tables
///
/// Source timestamps are UTC; rendering shifts them into the viewer's
/// timezone, which must be supplied explicitly along with a label for it.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// strftime-style display format for the timestamp cell
    pub timestamp_format: String,
    /// Offset the UTC source timestamps are shifted into for display
    pub timezone: FixedOffset,
    /// Label appended after the formatted timestamp, e.g. "UTC" or "CEST"
    pub timezone_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            timezone: FixedOffset::east_opt(0).unwrap(),
            timezone_label: "UTC".to_string(),
        }
    }
}

/// Renders log records as rows of an HTML table
///
/// # Examples
///
/// ```
/// use tasklog::record::LogRecord;
/// use tasklog::render::HtmlTableRenderer;
///
/// let record = LogRecord::from_fields(vec![
///     "2024-03-01T12:00:00.000000".to_string(),
///     "100".to_string(),
///     "stdout".to_string(),
///     "1".to_string(),
///     "hello".to_string(),
/// ]);
///
/// let renderer = HtmlTableRenderer::new();
/// let html = renderer.render_row(&record);
/// assert!(html.contains("<td class=\"pid\" title=\"PID\">100</td>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlTableRenderer {
    options: RenderOptions,
}

impl HtmlTableRenderer {
    /// Create a renderer with default options (UTC, second precision)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with explicit display options
    pub fn with_options(options: RenderOptions) -> Self {
        HtmlTableRenderer { options }
    }

    /// Render one record as a `<tr>` element
    pub fn render_row(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(160);
        self.write_row(&mut out, record);
        out
    }

    /// Render a complete `<table>` with one row per record
    pub fn render_table(&self, records: &[LogRecord]) -> String {
        let mut out = String::with_capacity(64 + records.len() * 160);
        out.push_str("<table>\n");
        for record in records {
            self.write_row(&mut out, record);
            out.push('\n');
        }
        out.push_str("</table>\n");
        out
    }

    fn write_row(&self, out: &mut String, record: &LogRecord) {
        out.push_str("<tr>");

        if record.len() > 0 {
            out.push_str("<td class=\"timestamp\" title=\"Date and Time\"><nobr>");
            // An unparsable timestamp renders as an empty cell
            if let Some(ts) = record.timestamp() {
                let local = ts.with_timezone(&self.options.timezone);
                let mut formatted = String::new();
                if write!(formatted, "{}", local.format(&self.options.timestamp_format))
                    .is_ok()
                {
                    escape_html(&formatted, out);
                    out.push(' ');
                    escape_html(&self.options.timezone_label, out);
                }
            }
            out.push_str("</nobr></td>");
        }
        if record.len() > 1 {
            out.push_str("<td class=\"pid\" title=\"PID\">");
            // The "None" sentinel renders as an empty cell
            if let Some(pid) = record.pid() {
                escape_html(pid, out);
            }
            out.push_str("</td>");
        }
        if record.len() > 2 {
            out.push_str("<td class=\"stream\" title=\"Stream\">");
            escape_html(record.get(2).unwrap_or(""), out);
            out.push_str("</td>");
        }
        if record.len() > 3 {
            out.push_str("<td class=\"lineno\" title=\"Line Number\">");
            escape_html(record.get(3).unwrap_or(""), out);
            out.push_str("</td>");
        }
        if record.len() > 4 {
            out.push_str("<td class=\"text\" title=\"Text\">");
            escape_html(record.message().unwrap_or(""), out);
            out.push_str("</td>");
        }

        out.push_str("</tr>");
    }
}

/// Escape text content for embedding in HTML
fn escape_html(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
