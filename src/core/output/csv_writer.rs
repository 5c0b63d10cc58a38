//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::models::{ChatLog, OutputConfig};
use crate::error::Result;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - One row per message; date markers become the `Date` column
/// - Columns: Depends on OutputConfig
///   - Basic: `Sender`, `Content`
///   - With dates: `Date`, `Sender`, `Content`
///   - With times: `Time`, `Sender`, `Content`
///   - With kinds: `Sender`, `Content`, `Kind`
/// - Encoding: UTF-8
pub fn write_csv(log: &ChatLog, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(log, config, file)
}

/// Converts messages to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(log: &ChatLog, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_records(log, config, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(log: &ChatLog, config: &OutputConfig, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;

    for (date, msg) in log.dated_messages() {
        writer.write_record(build_record(date, msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_dates {
        header.push("Date");
    }
    if config.include_times {
        header.push("Time");
    }

    header.push("Sender");
    header.push("Content");

    if config.include_kinds {
        header.push("Kind");
    }

    header
}

/// Build CSV record for a single message.
fn build_record<'a>(date: &'a str, msg: &'a Message, config: &OutputConfig) -> Vec<&'a str> {
    let mut record = Vec::new();

    if config.include_dates {
        record.push(date);
    }
    if config.include_times {
        record.push(msg.time.as_str());
    }

    record.push(msg.sender.as_str());
    record.push(msg.content());

    if config.include_kinds {
        record.push(msg.kind().as_str());
    }

    record
}
