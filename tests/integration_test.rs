//! Integration tests for tasklog

use std::fs::File;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use tasklog::delimited::{LogEncoder, LogParser};
use tasklog::record::{LogRecord, StreamKind};
use tasklog::render::{HtmlTableRenderer, RenderOptions};
use tasklog::{logfile, LogLocation};

#[test]
fn test_payload_to_html_pipeline() {
    let payload = "2024-03-01T12:00:00.000000,100,stdout,1,hello\n\
                   2024-03-01T12:00:01.500000,None,stderr,2,\"multi,part\"\n";

    let rows = LogParser::new().parse(payload).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][4], "multi,part");

    let records: Vec<LogRecord> = rows.into_iter().map(LogRecord::from_fields).collect();
    assert_eq!(records[0].pid(), Some("100"));
    assert_eq!(records[1].pid(), None);
    assert_eq!(records[1].stream(), Some(StreamKind::Stderr));

    let html = HtmlTableRenderer::new().render_table(&records);
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("2024-03-01 12:00:00 UTC"));
    assert!(html.contains("<td class=\"text\" title=\"Text\">multi,part</td>"));
    // Second row's pid cell present but empty
    assert!(html.contains("<td class=\"pid\" title=\"PID\"></td>"));
}

#[test]
fn test_gzipped_logfile_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("agent1_0012_0345.csv.gz");

    let mut buffer = Vec::new();
    let encoder = LogEncoder::new();
    encoder.encode_fields(
        &["2024-03-01T12:00:00.000000", "77", "stdout", "1", "starting job"],
        &mut buffer,
    );
    encoder.encode_fields(
        &["2024-03-01T12:00:05.000000", "77", "stderr", "2", "said \"done\", exiting"],
        &mut buffer,
    );

    let mut gz = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
    gz.write_all(&buffer).unwrap();
    gz.finish().unwrap();

    // Load through the uncompressed name, as the master addresses it
    let text = logfile::load(dir.path().join("agent1_0012_0345.csv")).unwrap();
    let rows = LogParser::new().parse(&text).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][4], "said \"done\", exiting");
}

#[test]
fn test_localized_rendering() {
    let payload = "2024-03-01T23:30:00.000000,1,stdout,1,late night\n";
    let rows = LogParser::new().parse(payload).unwrap();
    let records: Vec<LogRecord> = rows.into_iter().map(LogRecord::from_fields).collect();

    let options = RenderOptions {
        timestamp_format: "%H:%M".to_string(),
        timezone: chrono::FixedOffset::east_opt(3 * 3600).unwrap(),
        timezone_label: "MSK".to_string(),
    };
    let html = HtmlTableRenderer::with_options(options).render_table(&records);
    // 23:30 UTC crosses midnight at +03:00
    assert!(html.contains("<nobr>02:30 MSK</nobr>"));
}

#[test]
fn test_short_and_malformed_rows_tolerated() {
    let payload = "not-a-timestamp,None\n\n2024-03-01T08:00:00.000000,1,stdout,3\n";
    let rows = LogParser::new().parse(payload).unwrap();
    let records: Vec<LogRecord> = rows.into_iter().map(LogRecord::from_fields).collect();
    assert_eq!(records.len(), 3);

    let html = HtmlTableRenderer::new().render_table(&records);
    // Bad timestamp and blank line both degrade to empty timestamp cells
    assert!(html.contains("<nobr></nobr>"));
    // The four-field row has no text cell
    assert!(!html.contains("class=\"text\""));
}

#[test]
fn test_location_addresses_logfile() {
    let location = LogLocation::new(12, 345, 2, "agent1_0012_0345.csv");
    assert_eq!(
        location.logfile_path(),
        "/api/v1/jobs/12/tasks/345/attempts/2/logs/agent1_0012_0345.csv/logfile"
    );
}
