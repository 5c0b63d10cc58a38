//! JSON Lines (JSONL) output writer.
//!
//! One event per line, in source order. Title and save date are not part of
//! the event stream and are omitted.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::json_events;
use crate::core::models::{ChatLog, OutputConfig};
use crate::error::Result;

/// Writes events to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"type":"date","display_text":"2025년 5월 20일 화요일"}
/// {"type":"message","sender":"민수","content":"안녕"}
/// ```
pub fn write_jsonl(log: &ChatLog, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for event in json_events(log, config) {
        let line = serde_json::to_string(&event)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts events to a JSONL string.
pub fn to_jsonl(log: &ChatLog, config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for event in json_events(log, config) {
        out.push_str(&serde_json::to_string(&event)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::core::models::Event;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn sample_log() -> ChatLog {
        ChatLog::new(
            "민수",
            "",
            vec![
                Event::date_marker("2025년 5월 20일 화요일"),
                Message::new("민수", "10:00", "첫 줄\n둘째 줄").into(),
                Message::new("지영", "10:01", "https://example.com").into(),
            ],
        )
    }

    #[test]
    fn test_write_jsonl_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&sample_log(), path, &OutputConfig::new()).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 3);

        let marker: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(marker["type"], "date");

        // multi-line content stays on one physical line
        let msg: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(msg["sender"], "민수");
        assert_eq!(msg["content"], "첫 줄\n둘째 줄");
    }

    #[test]
    fn test_to_jsonl_with_kinds() {
        let out = to_jsonl(&sample_log(), &OutputConfig::new().with_kinds()).unwrap();
        let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["kind"], "link");
        assert!(last.get("time").is_none());
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let out = to_jsonl(&sample_log(), &OutputConfig::new()).unwrap();
        assert!(!out.starts_with('['));
        assert!(out.ends_with('\n'));
    }
}
