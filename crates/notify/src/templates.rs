//! Notification and email wording.
//!
//! All user-facing strings live here so the dispatcher stays free of
//! copy. Notification records store `message`; emails add a subject prefix
//! and a short plain-text body around the same message.

use moim_core::content::ContentKind;

/// Subject prefix for all portal mail.
const SUBJECT_PREFIX: &str = "[moim]";

/// The Korean noun for a content kind.
pub fn kind_noun(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Post => "게시글",
        ContentKind::CalendarEvent => "일정",
        ContentKind::Agenda => "안건",
    }
}

/// Message for a mention notification record.
pub fn mention_message(author_name: &str, kind: ContentKind) -> String {
    format!(
        "{author_name}님이 {}에서 회원님을 언급했습니다",
        kind_noun(kind)
    )
}

/// Message for a department broadcast notification record.
pub fn broadcast_message(author_name: &str, kind: ContentKind) -> String {
    format!("{author_name}님이 새 {}을 등록했습니다", kind_noun(kind))
}

/// Email subject for a notification message.
pub fn subject(message: &str) -> String {
    format!("{SUBJECT_PREFIX} {message}")
}

/// Plain-text email body.
pub fn email_body(title: &str, author_name: &str, message: &str) -> String {
    format!("{message}\n\n제목: {title}\n작성자: {author_name}\n\n포털에서 자세한 내용을 확인해 주세요.")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
