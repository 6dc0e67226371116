//! Encoding for the quoted delimited task log format

use crate::record::{LogRecord, PID_NONE};

/// Timestamps are written the way agents write them: ISO-8601 with
/// microseconds and the `Z` suffix omitted.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Encoder for quoted delimited log lines
///
/// Produces lines that [`LogParser`](crate::delimited::LogParser) reads back
/// unchanged: fields containing a comma, quote, CR or LF are wrapped in
/// double quotes, embedded quotes are doubled, and every line is terminated
/// with a line feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEncoder;

impl LogEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        LogEncoder
    }

    /// Encode one line from raw fields into the buffer
    pub fn encode_fields(&self, fields: &[&str], buffer: &mut Vec<u8>) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(b',');
            }
            self.encode_field(field, buffer);
        }
        buffer.push(b'\n');
    }

    /// Encode a typed record as one log line
    ///
    /// Writes the five positional fields: timestamp (empty if the record has
    /// neither a parsed nor a raw one), pid (the `None` sentinel when
    /// absent), stream, line number and message.
    pub fn encode_record(&self, record: &LogRecord, buffer: &mut Vec<u8>) {
        let timestamp = match record.timestamp() {
            Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
            None => record.raw_timestamp().unwrap_or("").to_string(),
        };
        let stream = record
            .stream()
            .map(|s| s.to_string())
            .unwrap_or_default();
        let mut lineno_buf = itoa::Buffer::new();
        let lineno = match record.lineno() {
            Some(n) => lineno_buf.format(n),
            None => "",
        };
        self.encode_fields(
            &[
                &timestamp,
                record.pid().unwrap_or(PID_NONE),
                &stream,
                lineno,
                record.message().unwrap_or(""),
            ],
            buffer,
        );
    }

    /// Quote and escape a single field if it needs it
    fn encode_field(&self, field: &str, buffer: &mut Vec<u8>) {
        if self.needs_quoting(field) {
            buffer.push(b'"');
            for byte in field.bytes() {
                if byte == b'"' {
                    // Escape quotes by doubling: " -> ""
                    buffer.push(b'"');
                    buffer.push(b'"');
                } else {
                    buffer.push(byte);
                }
            }
            buffer.push(b'"');
        } else {
            buffer.extend_from_slice(field.as_bytes());
        }
    }

    /// Check if a field requires quoting
    fn needs_quoting(&self, field: &str) -> bool {
        field
            .bytes()
            .any(|b| matches!(b, b',' | b'"' | b'\n' | b'\r'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimited::LogParser;

    fn encode(fields: &[&str]) -> String {
        let mut buffer = Vec::new();
        LogEncoder::new().encode_fields(fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_simple_fields() {
        assert_eq!(encode(&["a", "b", "c"]), "a,b,c\n");
    }

    #[test]
    fn test_quoted_fields() {
        assert_eq!(encode(&["a,b", "c"]), "\"a,b\",c\n");
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(
            encode(&["say \"hello\"", "world"]),
            "\"say \"\"hello\"\"\",world\n"
        );
    }

    #[test]
    fn test_embedded_newline() {
        assert_eq!(encode(&["line 1\nline 2", "x"]), "\"line 1\nline 2\",x\n");
    }

    #[test]
    fn test_round_trip_through_parser() {
        let fields = ["2024-03-01T09:00:00.000000", "None", "stderr", "3", "a \"b\", c\nd"];
        let mut buffer = Vec::new();
        LogEncoder::new().encode_fields(&fields, &mut buffer);

        let rows = LogParser::new()
            .parse(std::str::from_utf8(&buffer).unwrap())
            .unwrap();
        assert_eq!(rows, vec![fields.map(str::to_string).to_vec()]);
    }

    #[test]
    fn test_encode_record_round_trip() {
        let record = LogRecord::from_fields(
            ["2024-03-01T09:00:00.500000", "1234", "stdout", "42", "hello, world"]
                .map(str::to_string)
                .to_vec(),
        );

        let mut buffer = Vec::new();
        LogEncoder::new().encode_record(&record, &mut buffer);

        let rows = LogParser::new()
            .parse(std::str::from_utf8(&buffer).unwrap())
            .unwrap();
        let reparsed = LogRecord::from_fields(rows.into_iter().next().unwrap());
        assert_eq!(reparsed.timestamp(), record.timestamp());
        assert_eq!(reparsed.pid(), Some("1234"));
        assert_eq!(reparsed.lineno(), Some(42));
        assert_eq!(reparsed.message(), Some("hello, world"));
    }

    #[test]
    fn test_encode_record_pid_sentinel() {
        let record = LogRecord::from_fields(
            ["2024-03-01T09:00:00.000000", "None", "stdout", "1", "msg"]
                .map(str::to_string)
                .to_vec(),
        );
        let mut buffer = Vec::new();
        LogEncoder::new().encode_record(&record, &mut buffer);
        let line = String::from_utf8(buffer).unwrap();
        assert!(line.contains(",None,"));
    }
}
