//! Message content classification.
//!
//! [`classify`] maps message content to a [`MessageKind`] using a fixed
//! cascade of checks. The first matching rule wins, so the order below is
//! part of the behavior: a URL ending in `.pdf` is a link, not a file.

use crate::message::MessageKind;

/// Exact placeholders KakaoTalk writes for photos and videos.
const MEDIA_PLACEHOLDERS: &[&str] = &["사진", "동영상"];

/// Exact placeholder for an emoticon.
const EMOTICON_PLACEHOLDER: &str = "이모티콘";

/// Prefix used when an emoticon is sent together with text.
const EMOTICON_PREFIX: &str = "(이모티콘)";

/// Marker preceding a shared file name.
const FILE_MARKER: &str = "파일: ";

/// Document and archive extensions, lowercase.
const FILE_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".hwp", ".zip", ".rar", ".7z",
];

/// Placeholder for a voice message.
const VOICE_PLACEHOLDER: &str = "음성메시지";

/// Phrases of join / leave / room-created notices.
const SYSTEM_PHRASES: &[&str] = &[
    "님이 들어왔습니다",
    "님이 나갔습니다",
    "님을 초대했습니다",
    "채팅방을 만들었습니다",
];

/// Classifies message content.
///
/// # Example
///
/// ```
/// use kakaolog::MessageKind;
/// use kakaolog::parsing::classify;
///
/// assert_eq!(classify(""), MessageKind::Empty);
/// assert_eq!(classify("사진"), MessageKind::Media);
/// assert_eq!(classify("https://example.com"), MessageKind::Link);
/// assert_eq!(classify("철수 님이 들어왔습니다."), MessageKind::System);
/// assert_eq!(classify("그냥 텍스트"), MessageKind::Text);
/// ```
pub fn classify(content: &str) -> MessageKind {
    if content.is_empty() {
        MessageKind::Empty
    } else if is_media(content) {
        MessageKind::Media
    } else if is_emoticon(content) {
        MessageKind::Emoticon
    } else if is_link(content) {
        MessageKind::Link
    } else if is_file(content) {
        MessageKind::File
    } else if content.contains(VOICE_PLACEHOLDER) {
        MessageKind::Voice
    } else if SYSTEM_PHRASES.iter().any(|p| content.contains(p)) {
        MessageKind::System
    } else {
        MessageKind::Text
    }
}

fn is_media(content: &str) -> bool {
    MEDIA_PLACEHOLDERS.contains(&content) || is_photo_bundle(content)
}

/// Matches the multi-photo placeholder `사진 <N>장`.
fn is_photo_bundle(content: &str) -> bool {
    content
        .strip_prefix("사진 ")
        .and_then(|rest| rest.strip_suffix('장'))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn is_emoticon(content: &str) -> bool {
    content == EMOTICON_PLACEHOLDER || content.starts_with(EMOTICON_PREFIX)
}

fn is_link(content: &str) -> bool {
    content.contains("http://") || content.contains("https://")
}

fn is_file(content: &str) -> bool {
    if content.contains(FILE_MARKER) {
        return true;
    }
    let lower = content.to_lowercase();
    FILE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(classify(""), MessageKind::Empty);
    }

    #[test]
    fn test_media_placeholders() {
        assert_eq!(classify("사진"), MessageKind::Media);
        assert_eq!(classify("동영상"), MessageKind::Media);
        assert_eq!(classify("사진 3장"), MessageKind::Media);
        assert_eq!(classify("사진 12장"), MessageKind::Media);
    }

    #[test]
    fn test_media_requires_exact_match() {
        assert_eq!(classify("사진 보내줘"), MessageKind::Text);
        assert_eq!(classify("사진 장"), MessageKind::Text);
        assert_eq!(classify("사진\n보내줘"), MessageKind::Text);
    }

    #[test]
    fn test_trailing_newline_is_content() {
        assert_eq!(classify("\n"), MessageKind::Text);
        assert_eq!(classify("사진\n"), MessageKind::Text);
        assert_eq!(classify("사진 3장\n\n"), MessageKind::Text);
        assert_eq!(classify("report.pdf\n"), MessageKind::Text);
    }

    #[test]
    fn test_emoticon() {
        assert_eq!(classify("이모티콘"), MessageKind::Emoticon);
        assert_eq!(classify("(이모티콘) 고마워"), MessageKind::Emoticon);
        assert_eq!(classify("이모티콘 어디서 샀어?"), MessageKind::Text);
    }

    #[test]
    fn test_link() {
        assert_eq!(classify("https://example.com"), MessageKind::Link);
        assert_eq!(classify("여기 봐 http://example.com/a"), MessageKind::Link);
    }

    #[test]
    fn test_link_wins_over_file_extension() {
        assert_eq!(
            classify("https://example.com/report.pdf"),
            MessageKind::Link
        );
    }

    #[test]
    fn test_file() {
        assert_eq!(classify("파일: 회의록.docx"), MessageKind::File);
        assert_eq!(classify("보고서.PDF"), MessageKind::File);
        assert_eq!(classify("archive.7z"), MessageKind::File);
        assert_eq!(classify("notes.txt"), MessageKind::Text);
    }

    #[test]
    fn test_voice() {
        assert_eq!(classify("음성메시지"), MessageKind::Voice);
        assert_eq!(classify("음성메시지 0:12"), MessageKind::Voice);
    }

    #[test]
    fn test_system() {
        assert_eq!(classify("철수 님이 들어왔습니다."), MessageKind::System);
        assert_eq!(classify("영희 님이 나갔습니다."), MessageKind::System);
        assert_eq!(
            classify("민수 님이 철수 님을 초대했습니다."),
            MessageKind::System
        );
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(classify("그냥 텍스트"), MessageKind::Text);
        assert_eq!(classify("hello"), MessageKind::Text);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for content in ["", "사진", "https://a.b", "파일: x.zip", "음성메시지", "hi"] {
            assert_eq!(classify(content), classify(content));
        }
    }
}
