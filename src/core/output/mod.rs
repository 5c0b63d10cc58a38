//! Output format writers.
//!
//! Writers export a parsed [`ChatLog`](crate::ChatLog) for other tools. They
//! are one-way: nothing in this crate reads these files back.
//!
//! - [`write_csv`] / [`to_csv`] - messages as semicolon-delimited rows - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the whole log as one JSON document - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON event per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> kakaolog::Result<()> {
//! use kakaolog::core::output::{to_csv, write_json};
//! use kakaolog::core::models::OutputConfig;
//!
//! let log = kakaolog::parse("민수 님과 카카오톡 대화\n[민수] [10:00] 안녕");
//! let config = OutputConfig::new().with_times();
//!
//! write_json(&log, "chat.json", &config)?;
//! let csv_string = to_csv(&log, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
