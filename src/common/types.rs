use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// Domain model đại diện một tin nhắn chat. Không bao giờ bị sửa sau khi tạo.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(author: Author, text: impl Into<String>, sequence: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text: text.into(),
            sequence,
            created_at: Utc::now(),
        }
    }
}

/// Một sự kiện do chat API trả về, hiển thị dưới dạng card.
///
/// Tên field trên wire là tiếng Tây Ban Nha. Field thiếu được nhận là chuỗi rỗng.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    /// `DD/MM/YYYY HH:MM`
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "precio")]
    pub price: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// Payload thành công của một lần gửi.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub events: Vec<EventRecord>,
}

/// Một mục trong khung chat: tin nhắn hoặc lưới event card.
#[derive(Debug, Clone)]
pub enum TimelineEntry {
    Message(ChatMessage),
    Events { id: Uuid, events: Vec<EventRecord> },
}

impl TimelineEntry {
    pub fn as_message(&self) -> Option<&ChatMessage> {
        match self {
            TimelineEntry::Message(message) => Some(message),
            TimelineEntry::Events { .. } => None,
        }
    }
}
