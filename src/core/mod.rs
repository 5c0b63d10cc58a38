//! Parsed model and everything computed from it.
//!
//! This module contains:
//! - [`models`] - [`ChatLog`], [`Event`] and [`OutputConfig`]
//! - [`processor`] - [`Stats`] derived from a log
//! - [`filter`] - sender / date / kind filtering
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{ChatLog, Event, OutputConfig};
pub use processor::{SenderStats, Stats, get_stats};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
