//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`KindArg`] - Message kind filter values
//!
//! Both value enums convert into their library counterparts, so they can be
//! used outside of the binary as well:
//!
//! ```rust
//! use kakaolog::cli::{KindArg, OutputFormat};
//! use kakaolog::MessageKind;
//!
//! let format: kakaolog::format::OutputFormat = OutputFormat::Jsonl.into();
//! assert_eq!(format.extension(), "jsonl");
//!
//! let kind: MessageKind = KindArg::Link.into();
//! assert_eq!(kind, MessageKind::Link);
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{HeaderPolicy, ParserConfig};
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::MessageKind;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "kakao_chat.csv";

/// Parse KakaoTalk chat exports, print statistics and convert them
/// to CSV, JSON or JSONL.
#[derive(Parser, Debug, Clone)]
#[command(name = "kakaolog")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    kakaolog KakaoTalk_20250521.txt
    kakaolog chat.txt -o chat.json -t -k
    kakaolog chat.txt --from 민수 --after 2025-05-01
    kakaolog chat.txt --kind link -f jsonl
    kakaolog chat.txt --stats-only")]
pub struct Args {
    /// Path to the exported .txt file
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format [default: taken from the output extension, else csv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep only messages from this sender (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only messages of this kind
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Include message times in output
    #[arg(short = 't', long)]
    pub times: bool,

    /// Include the day of each message in output
    #[arg(short = 'd', long)]
    pub dates: bool,

    /// Include message kinds in output
    #[arg(short = 'k', long)]
    pub kinds: bool,

    /// Print statistics and exit without writing output
    #[arg(long)]
    pub stats_only: bool,

    /// Let a repeated title or save-date header overwrite the earlier one
    #[arg(long)]
    pub last_title_wins: bool,

    /// Drop blank lines at the end of message bodies
    #[arg(long)]
    pub trim_trailing_blank: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the parser configuration selected by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        let policy = if self.last_title_wins {
            HeaderPolicy::LastWins
        } else {
            HeaderPolicy::FirstWins
        };
        ParserConfig::new()
            .with_header_policy(policy)
            .with_trim_trailing_blank_lines(self.trim_trailing_blank)
    }

    /// Builds the filter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KakaologError::InvalidDate`](crate::KakaologError::InvalidDate)
    /// if `--after` or `--before` is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from.clone());
        }
        if let Some(kind) = self.kind {
            filter = filter.with_kind(kind.into());
        }
        Ok(filter)
    }

    /// Builds the output configuration.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.dates {
            config = config.with_dates();
        }
        if self.times {
            config = config.with_times();
        }
        if self.kinds {
            config = config.with_kinds();
        }
        config
    }

    /// Format to write: `--format` if given, otherwise the one matching
    /// the output extension, otherwise CSV.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        crate::format::OutputFormat::from_path(&self.output).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "falling back to CSV output");
            crate::format::OutputFormat::default()
        })
    }

    /// Output path, with the extension adjusted to the format when the
    /// default path is used.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        format!("kakao_chat.{}", self.output_format().extension())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON document
    Json,

    /// JSON Lines - one event per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Values accepted by `--kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum KindArg {
    Text,
    Media,
    Emoticon,
    Link,
    File,
    Voice,
    System,
    Empty,
}

impl From<KindArg> for MessageKind {
    fn from(kind: KindArg) -> MessageKind {
        match kind {
            KindArg::Text => MessageKind::Text,
            KindArg::Media => MessageKind::Media,
            KindArg::Emoticon => MessageKind::Emoticon,
            KindArg::Link => MessageKind::Link,
            KindArg::File => MessageKind::File,
            KindArg::Voice => MessageKind::Voice,
            KindArg::System => MessageKind::System,
            KindArg::Empty => MessageKind::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["kakaolog", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.format, None);
        assert_eq!(args.output_format(), crate::format::OutputFormat::Csv);
        assert_eq!(args.output_path(), "kakao_chat.csv");
        assert_eq!(args.verbose, 0);
        assert!(!args.stats_only);
        assert!(!args.filter_config().unwrap().is_active());
        assert_eq!(args.parser_config(), ParserConfig::default());
    }

    #[test]
    fn test_default_output_follows_format() {
        assert_eq!(args(&["-f", "jsonl"]).output_path(), "kakao_chat.jsonl");
        assert_eq!(args(&["-f", "json", "-o", "out.txt"]).output_path(), "out.txt");
    }

    #[test]
    fn test_ndjson_alias() {
        assert_eq!(args(&["-f", "ndjson"]).format, Some(OutputFormat::Jsonl));
    }

    #[test]
    fn test_format_follows_output_extension() {
        use crate::format::OutputFormat as Lib;

        assert_eq!(args(&["-o", "chat.json"]).output_format(), Lib::Json);
        assert_eq!(args(&["-o", "chat.NDJSON"]).output_format(), Lib::Jsonl);
        assert_eq!(args(&["-o", "chat.txt"]).output_format(), Lib::Csv);
        assert_eq!(args(&["-o", "chat.json", "-f", "csv"]).output_format(), Lib::Csv);
    }

    #[test]
    fn test_filter_flags() {
        let filter = args(&["--from", "민수", "--after", "2025-05-01", "--kind", "link"])
            .filter_config()
            .unwrap();
        assert!(filter.is_active());
        assert!(filter.has_date_filter());
        assert_eq!(filter.kind, Some(MessageKind::Link));
    }

    #[test]
    fn test_invalid_date_flag() {
        let err = args(&["--before", "20/05/2025"]).filter_config().unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_output_flags() {
        let config = args(&["-t", "-d", "-k"]).output_config();
        assert_eq!(config, OutputConfig::all());
    }

    #[test]
    fn test_parser_flags() {
        let config = args(&["--last-title-wins", "--trim-trailing-blank"]).parser_config();
        assert_eq!(config.header_policy, HeaderPolicy::LastWins);
        assert!(config.trim_trailing_blank_lines);
    }

    #[test]
    fn test_verbose_count() {
        assert_eq!(args(&["-vv"]).verbose, 2);
    }

    #[test]
    fn test_missing_input_is_error() {
        assert!(Args::try_parse_from(["kakaolog"]).is_err());
    }
}
