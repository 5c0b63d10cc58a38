//! Output format selection.
//!
//! [`OutputFormat`] names the writers in [`core::output`](crate::core::output)
//! and [`write_to_format`] / [`to_format_string`] dispatch a [`ChatLog`] to
//! them. The CLI falls back to [`OutputFormat::from_path`] when `--format` is
//! not given, so `-o chat.json` writes JSON.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> kakaolog::Result<()> {
//! use kakaolog::format::{OutputFormat, to_format_string};
//! use kakaolog::core::models::OutputConfig;
//!
//! let log = kakaolog::parse("[민수] [10:00] 안녕");
//! let format = OutputFormat::from_path("KakaoTalk_20250521.jsonl")?;
//! let jsonl = to_format_string(&log, format, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{ChatLog, OutputConfig};
use crate::error::KakaologError;

/// Writer a [`ChatLog`] is exported with.
///
/// The CSV writer folds date markers into an optional column; both JSON
/// writers keep them as separate events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// One `;`-separated row per message.
    #[default]
    Csv,

    /// A single pretty-printed document with title, save date and events.
    Json,

    /// One event object per line (NDJSON).
    Jsonl,
}

struct FormatInfo {
    format: OutputFormat,
    label: &'static str,
    // first name doubles as the file extension
    names: &'static [&'static str],
    feature: &'static str,
}

static FORMATS: [FormatInfo; 3] = [
    FormatInfo {
        format: OutputFormat::Csv,
        label: "CSV",
        names: &["csv"],
        feature: "csv-output",
    },
    FormatInfo {
        format: OutputFormat::Json,
        label: "JSON",
        names: &["json"],
        feature: "json-output",
    },
    FormatInfo {
        format: OutputFormat::Jsonl,
        label: "JSONL",
        names: &["jsonl", "ndjson"],
        feature: "json-output",
    },
];

impl OutputFormat {
    fn info(self) -> &'static FormatInfo {
        match self {
            OutputFormat::Csv => &FORMATS[0],
            OutputFormat::Json => &FORMATS[1],
            OutputFormat::Jsonl => &FORMATS[2],
        }
    }

    /// Looks a format up by name or extension, ignoring ASCII case.
    fn lookup(name: &str) -> Option<Self> {
        FORMATS
            .iter()
            .find(|info| info.names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|info| info.format)
    }

    fn accepted_names() -> String {
        FORMATS
            .iter()
            .flat_map(|info| info.names.iter().copied())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// File extension written for this format, without the dot.
    ///
    /// ```rust
    /// use kakaolog::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        self.info().names[0]
    }

    /// Every format, in the order the CLI lists them.
    pub fn all() -> [OutputFormat; 3] {
        std::array::from_fn(|i| FORMATS[i].format)
    }

    /// Picks the format matching the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KakaologError::InvalidFormat`] when the path has no
    /// extension or one no writer produces.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KakaologError> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::lookup)
            .ok_or_else(|| {
                KakaologError::invalid_format(
                    "output",
                    format!(
                        "cannot tell the format of '{}'; use one of the extensions {}",
                        path.display(),
                        Self::accepted_names()
                    ),
                )
            })
    }

    fn feature_disabled(self) -> KakaologError {
        let info = self.info();
        KakaologError::invalid_format(
            "output",
            format!("{} output needs the '{}' feature", info.label, info.feature),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().label)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            format!(
                "Unknown format: '{s}'. Expected one of: {}",
                Self::accepted_names()
            )
        })
    }
}

/// Writes `log` to `path` with the writer for `format`.
///
/// ```rust,no_run
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> kakaolog::Result<()> {
/// use kakaolog::format::{OutputFormat, write_to_format};
/// use kakaolog::core::models::OutputConfig;
///
/// let log = kakaolog::parse("민수 님과 카카오톡 대화\n[민수] [오후 3:12] 안녕\n");
/// write_to_format(&log, "민수.csv", OutputFormat::Csv, &OutputConfig::new().with_times())?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails when the writer for `format` was compiled out, or when the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    log: &ChatLog,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), KakaologError> {
    tracing::debug!(path, %format, "writing chat log");
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(log, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(log, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(log, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.feature_disabled()),
    }
}

/// Renders `log` in memory with the writer for `format`.
///
/// # Errors
///
/// Fails when the writer for `format` was compiled out or serialization
/// fails.
#[allow(unused_variables)]
pub fn to_format_string(
    log: &ChatLog,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, KakaologError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(log, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(log, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(log, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.feature_disabled()),
    }
}
