//! Export grammar and content classification.
//!
//! - [`kakao`] - what a physical line of a KakaoTalk export is
//! - [`classify`](mod@classify) - message content to [`MessageKind`](crate::MessageKind)

pub mod classify;
pub mod kakao;

pub use classify::classify;
pub use kakao::{
    LineKind, SAVE_DATE_PREFIX, TITLE_MARKER, classify_line, date_from_display, normalize_date,
};
