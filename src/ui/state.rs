use std::collections::HashSet;

use uuid::Uuid;

use crate::common::{Author, ChatMessage, ChatReply, TimelineEntry, TransportError};

pub const FALLBACK_REPLY: &str = "Lo siento, hubo un error al procesar tu mensaje.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    About,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

/// Câu hỏi gợi ý: `text` hiển thị, `query` được gửi đi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqQuestion {
    pub text: &'static str,
    pub query: &'static str,
}

pub const FAQ_QUESTIONS: [FaqQuestion; 6] = [
    FaqQuestion {
        text: "¿Qué eventos hay hoy?",
        query: "eventos de hoy",
    },
    FaqQuestion {
        text: "¿Qué eventos hay esta semana?",
        query: "eventos de esta semana",
    },
    FaqQuestion {
        text: "¿Qué eventos hay este mes?",
        query: "eventos de este mes",
    },
    FaqQuestion {
        text: "¿Qué eventos son gratis?",
        query: "eventos gratis",
    },
    FaqQuestion {
        text: "¿Qué eventos hay de música?",
        query: "eventos de música",
    },
    FaqQuestion {
        text: "¿Qué eventos hay de teatro?",
        query: "eventos de teatro",
    },
];

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub screen: Screen,
    pub timeline: Vec<TimelineEntry>,
    pub input_text: String,
    pub send_state: SendState,
    pub faq_visible: bool,
    /// Card (grid id, index) đã hiện ra ít nhất một lần
    revealed_cards: HashSet<(Uuid, usize)>,
    next_sequence: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            timeline: Vec::new(),
            input_text: String::new(),
            send_state: SendState::Idle,
            faq_visible: false,
            revealed_cards: HashSet::new(),
            next_sequence: 0,
        }
    }

    pub fn start_chat(&mut self) {
        self.screen = Screen::Chat;
        self.faq_visible = true;
    }

    pub fn show_about(&mut self) {
        self.screen = Screen::About;
    }

    pub fn back_to_welcome(&mut self) {
        self.screen = Screen::Welcome;
    }

    pub fn is_input_enabled(&self) -> bool {
        self.send_state == SendState::Idle
    }

    pub fn is_typing(&self) -> bool {
        self.send_state == SendState::Sending
    }

    /// Trả về text cần gửi, hoặc `None` nếu text rỗng hay đang có request chạy.
    /// `display_text` thay cho text trong khung chat (dùng cho FAQ pill).
    pub fn begin_send(&mut self, text: &str, display_text: Option<&str>) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.send_state == SendState::Sending {
            log::debug!("Ignoring send while a request is in flight");
            return None;
        }

        self.push_message(Author::User, display_text.unwrap_or(trimmed));
        self.input_text.clear();
        self.send_state = SendState::Sending;
        Some(trimmed.to_string())
    }

    /// Luôn đưa widget về `Idle`, dù request thành công hay thất bại.
    pub fn settle_send(&mut self, outcome: Result<ChatReply, TransportError>) {
        self.send_state = SendState::Idle;

        match outcome {
            Ok(reply) => {
                if !reply.response.trim().is_empty() {
                    self.push_message(Author::Bot, reply.response);
                }
                if !reply.events.is_empty() {
                    self.timeline.push(TimelineEntry::Events {
                        id: Uuid::new_v4(),
                        events: reply.events,
                    });
                }
            }
            Err(err) => {
                log::warn!("Showing fallback reply: {err}");
                self.push_message(Author::Bot, FALLBACK_REPLY);
            }
        }

        log::debug!("Timeline now holds {} messages", self.message_count());
    }

    pub fn is_card_revealed(&self, grid_id: Uuid, index: usize) -> bool {
        self.revealed_cards.contains(&(grid_id, index))
    }

    pub fn reveal_card(&mut self, grid_id: Uuid, index: usize) {
        self.revealed_cards.insert((grid_id, index));
    }

    pub fn message_count(&self) -> usize {
        self.timeline
            .iter()
            .filter(|entry| entry.as_message().is_some())
            .count()
    }

    fn push_message(&mut self, author: Author, text: impl Into<String>) {
        let message = ChatMessage::new(author, text, self.next_sequence);
        self.next_sequence += 1;
        self.timeline.push(TimelineEntry::Message(message));
    }
}
