//! Parsing for the quoted delimited task log format

use crate::error::{Result, TaskLogError};

/// Quote state of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    /// Outside any quoted span
    Unquoted,
    /// Inside a quoted span; commas and line feeds are literal field content
    Quoted,
}

/// Parser for quoted delimited task logs
///
/// Converts a complete log payload into an ordered sequence of rows, each an
/// ordered sequence of fields. Fields containing commas, line feeds or quote
/// characters are wrapped in double quotes; an embedded quote is escaped by
/// doubling (`""`). Carriage returns are discarded everywhere, so CRLF and
/// bare LF line endings are equivalent.
///
/// Each `parse` call owns its own state, so a parser can be shared freely
/// across threads.
///
/// # Examples
///
/// ```
/// use tasklog::delimited::LogParser;
///
/// let rows = LogParser::new()
///     .parse("ts1,100,stdout,1,hello\n")
///     .unwrap();
/// assert_eq!(rows, vec![vec!["ts1", "100", "stdout", "1", "hello"]]);
/// ```
///
/// # Trailing rows
///
/// Agents terminate every log line with a line feed, so by default a
/// trailing row without one is dropped. Use
/// [`flush_trailing`](Self::flush_trailing) to emit it instead:
///
/// ```
/// use tasklog::delimited::LogParser;
///
/// let rows = LogParser::new().parse("a,b\nc,d").unwrap();
/// assert_eq!(rows, vec![vec!["a", "b"]]);
///
/// let rows = LogParser::new()
///     .flush_trailing(true)
///     .parse("a,b\nc,d")
///     .unwrap();
/// assert_eq!(rows.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    flush_trailing: bool,
    strict: bool,
}

impl LogParser {
    /// Create a parser with the default permissive behavior
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a trailing row that has no terminating line feed (builder pattern)
    pub fn flush_trailing(mut self, flush: bool) -> Self {
        self.flush_trailing = flush;
        self
    }

    /// Report an unclosed quoted span as an error instead of absorbing it
    /// silently (builder pattern)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse a complete log payload into rows of fields
    ///
    /// Single forward scan with one character of lookahead for doubled
    /// quotes. Malformed quoting never fails outside strict mode; it only
    /// shifts subsequent field boundaries.
    pub fn parse(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut state = QuoteState::Unquoted;
        let mut quote_open = 0;

        let mut chars = text.char_indices().peekable();
        while let Some((pos, ch)) = chars.next() {
            match state {
                QuoteState::Unquoted => match ch {
                    '"' => {
                        state = QuoteState::Quoted;
                        quote_open = pos;
                    }
                    ',' => {
                        row.push(std::mem::take(&mut field));
                    }
                    '\r' => {}
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        if !row.is_empty() {
                            rows.push(std::mem::take(&mut row));
                        }
                    }
                    _ => field.push(ch),
                },
                QuoteState::Quoted => match ch {
                    '"' => {
                        if chars.peek().map(|&(_, next)| next) == Some('"') {
                            // Doubled quote is a literal quote character
                            field.push('"');
                            chars.next();
                        } else {
                            state = QuoteState::Unquoted;
                        }
                    }
                    // CRs are dropped even inside quoted spans
                    '\r' => {}
                    _ => field.push(ch),
                },
            }
        }

        if self.strict && state == QuoteState::Quoted {
            return Err(TaskLogError::UnclosedQuote {
                position: quote_open,
            });
        }

        if self.flush_trailing && !(field.is_empty() && row.is_empty()) {
            row.push(field);
            rows.push(row);
        }

        Ok(rows)
    }
}
