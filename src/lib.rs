//! # kakaolog
//!
//! A Rust library for parsing KakaoTalk plain-text chat exports into a typed
//! event sequence.
//!
//! ## Overview
//!
//! A KakaoTalk export is a loosely delimited, human-oriented text file: a room
//! title header, a save-date header, dashed day separators and bracketed
//! message headers whose bodies may continue over several physical lines.
//! kakaolog turns it into a [`ChatLog`]:
//!
//! - **title** and **save date** from the header lines
//! - **events**: [`Event::DateMarker`] day boundaries and [`Event::Message`]s
//! - every [`Message`] carries a [`MessageKind`] derived from its content
//!
//! Parsing never fails. A log that is not a usable export (no title, no
//! messages) is rejected separately by [`ChatLog::validate`].
//!
//! ## Quick Start
//!
//! ```rust
//! use kakaolog::prelude::*;
//!
//! let text = "\
//! 민수 님과 카카오톡 대화
//! 저장한 날짜 : 2025-05-21 09:14:02
//!
//! --------------- 2025년 5월 20일 화요일 ---------------
//! [민수] [오후 3:12] 안녕
//! [민수] [오후 3:12] 사진
//! [지영] [오후 3:13] 응 안녕
//! ";
//!
//! let log = kakaolog::parse(text);
//! log.validate()?;
//!
//! let stats = get_stats(&log);
//! assert_eq!(stats.total_messages, 3);
//! assert_eq!(stats.total_days, 1);
//! assert_eq!(stats.sender("민수").unwrap().percentage, 67);
//! # Ok::<(), kakaolog::KakaologError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser), the line state machine
//! - [`parsing`] - export line grammar and the content classifier
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - the [`ChatLog`] model, statistics, filters and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`KakaologError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::{ChatLog, Event};
pub use crate::core::processor::{SenderStats, Stats, get_stats};
pub use error::{KakaologError, Result};
pub use message::{Message, MessageKind};
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use kakaolog::prelude::*;
/// ```
pub mod prelude {
    // Model
    pub use crate::core::models::{ChatLog, Event, OutputConfig};
    pub use crate::message::{Message, MessageKind};

    // Error types
    pub use crate::error::{KakaologError, Result};

    // Parsing
    pub use crate::config::{HeaderPolicy, ParserConfig};
    pub use crate::parser::{ExportParser, parse};
    pub use crate::parsing::classify;

    // Statistics and filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::processor::{SenderStats, Stats, get_stats};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
