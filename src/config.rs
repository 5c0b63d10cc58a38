//! Parser configuration.
//!
//! The defaults reproduce the plain export semantics; every option here only
//! decides a case the export format itself leaves open.
//!
//! # Example
//!
//! ```rust
//! use kakaolog::config::{HeaderPolicy, ParserConfig};
//! use kakaolog::parser::ExportParser;
//!
//! let config = ParserConfig::new()
//!     .with_header_policy(HeaderPolicy::LastWins)
//!     .with_trim_trailing_blank_lines(true);
//!
//! let parser = ExportParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// What to do when a title or save-date header appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Keep the value of the first header line; ignore later ones.
    #[default]
    FirstWins,
    /// Each header line overwrites the previous value.
    LastWins,
}

/// Configuration for [`ExportParser`](crate::parser::ExportParser).
///
/// # Example
///
/// ```rust
/// use kakaolog::config::{HeaderPolicy, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.header_policy, HeaderPolicy::FirstWins);
/// assert!(!config.trim_trailing_blank_lines);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Policy for repeated title / save-date headers (default: first wins)
    pub header_policy: HeaderPolicy,

    /// Drop blank lines at the end of a message body when it closes
    /// (default: false, blank lines are kept as `\n`)
    pub trim_trailing_blank_lines: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for repeated header lines.
    #[must_use]
    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    /// Sets whether trailing blank lines are removed from message bodies.
    #[must_use]
    pub fn with_trim_trailing_blank_lines(mut self, trim: bool) -> Self {
        self.trim_trailing_blank_lines = trim;
        self
    }
}
