//! Line grammar of KakaoTalk text exports.
//!
//! An export looks like this:
//!
//! ```text
//! 민수 님과 카카오톡 대화
//! 저장한 날짜 : 2025-05-21 09:14:02
//!
//! --------------- 2025년 5월 20일 화요일 ---------------
//! [민수] [오후 3:12] 안녕
//! [지영] [오후 3:13] 응 안녕
//! 두 번째 줄
//! ```
//!
//! [`classify_line`] decides what a single physical line is. It knows nothing
//! about parser state; continuation handling lives in
//! [`ExportParser`](crate::parser::ExportParser).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Phrase following the partner name in the room-title header.
pub const TITLE_MARKER: &str = " 님과 카카오톡 대화";

/// Prefix of the save-date header.
pub const SAVE_DATE_PREFIX: &str = "저장한 날짜 : ";

/// Dash that opens a date separator line; any run length counts.
const SEPARATOR_DASH: char = '-';

// [sender] [time] content
static MESSAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]+)\]\s*\[([^\]]+)\]\s*(.*)$").expect("message header pattern is valid")
});

// 2025년 5월 20일 화요일
static DATE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)년\s*(\d+)월\s*(\d+)일\s*([^\s\-]+)").expect("date grammar pattern is valid")
});

// 2025년 5월 20일, weekday optional
static CALENDAR_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)년\s*(\d+)월\s*(\d+)일").expect("calendar day pattern is valid")
});

/// What one physical line of an export is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Room title header, with the extracted partner/room name.
    Title(String),
    /// Save-date header, with the remainder after the prefix.
    SaveDate(&'a str),
    /// Day separator, with the normalized display text.
    DateSeparator(String),
    /// Start of a new message.
    MessageHeader {
        sender: &'a str,
        time: &'a str,
        content: &'a str,
    },
    /// Anything else.
    Other,
}

/// Classifies one physical line.
///
/// Matching is done on the trimmed line; checks run in a fixed order, so a
/// message whose text contains the title phrase is still read as a title.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.contains(TITLE_MARKER) {
        return LineKind::Title(trimmed.replace(TITLE_MARKER, "").trim().to_string());
    }

    if let Some(rest) = trimmed.strip_prefix(SAVE_DATE_PREFIX) {
        return LineKind::SaveDate(rest.trim());
    }

    if is_date_separator(trimmed) {
        return LineKind::DateSeparator(date_display_text(trimmed));
    }

    if let Some(caps) = MESSAGE_HEADER.captures(trimmed) {
        let sender = caps.get(1).map_or("", |m| m.as_str().trim());
        let time = caps.get(2).map_or("", |m| m.as_str().trim());
        let content = caps.get(3).map_or("", |m| m.as_str().trim());
        return LineKind::MessageHeader {
            sender,
            time,
            content,
        };
    }

    LineKind::Other
}

/// Returns `true` for a dash-run line carrying a year and month token.
pub fn is_date_separator(trimmed: &str) -> bool {
    trimmed.starts_with(SEPARATOR_DASH) && trimmed.contains('년') && trimmed.contains('월')
}

/// Extracts the normalized `<Y>년 <M>월 <D>일 <weekday>` text from a
/// separator line.
///
/// Leading zeros in the digit groups are dropped. Returns `None` when the
/// line does not follow the date grammar.
pub fn normalize_date(line: &str) -> Option<String> {
    let caps = DATE_GRAMMAR.captures(line)?;
    let year = normalize_number(caps.get(1)?.as_str());
    let month = normalize_number(caps.get(2)?.as_str());
    let day = normalize_number(caps.get(3)?.as_str());
    let weekday = caps.get(4)?.as_str();
    Some(format!("{year}년 {month}월 {day}일 {weekday}"))
}

/// Calendar date of a normalized display text such as `2025년 5월 20일 화요일`.
///
/// The weekday token is ignored and may be missing. Returns `None` for text
/// without a full year/month/day triple or for an impossible date.
pub fn date_from_display(text: &str) -> Option<NaiveDate> {
    let caps = CALENDAR_DAY.captures(text)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Display text for a separator line, falling back to the line without its
/// dash runs when the date grammar does not match.
fn date_display_text(trimmed: &str) -> String {
    normalize_date(trimmed).unwrap_or_else(|| {
        tracing::debug!(line = trimmed, "date separator without a full date");
        trimmed.trim_matches(SEPARATOR_DASH).trim().to_string()
    })
}

fn normalize_number(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}
