use crate::common::{Author, TimelineEntry};

use super::event_card::render_event_list;
use super::markup::render_message;

/// `true` cho tin nhắn cuối của mỗi chuỗi liên tiếp cùng tác giả.
/// Lưới event card không làm đứt chuỗi và luôn nhận `false`.
pub fn last_markers(timeline: &[TimelineEntry]) -> Vec<bool> {
    let mut markers = vec![false; timeline.len()];
    let mut next_author: Option<Author> = None;

    for (index, entry) in timeline.iter().enumerate().rev() {
        if let Some(message) = entry.as_message() {
            markers[index] = next_author != Some(message.author);
            next_author = Some(message.author);
        }
    }

    markers
}

pub fn transcript_html(timeline: &[TimelineEntry]) -> String {
    let markers = last_markers(timeline);
    let mut html = String::from(r#"<div class="chat-messages">"#);

    for (entry, is_last) in timeline.iter().zip(markers) {
        match entry {
            TimelineEntry::Message(message) => {
                let author_class = match message.author {
                    Author::User => "user-message",
                    Author::Bot => "bot-message",
                };
                let last_class = if is_last { " last" } else { "" };
                html.push_str(&format!(
                    r#"<div class="message {author_class}{last_class}"><div class="message-content-wrapper">{}</div></div>"#,
                    render_message(&message.text).to_html()
                ));
            }
            TimelineEntry::Events { events, .. } => {
                if let Some(grid) = render_event_list(events) {
                    html.push_str(&grid.to_html());
                }
            }
        }
    }

    html.push_str("</div>");
    html
}

pub fn transcript_plain(timeline: &[TimelineEntry]) -> String {
    let mut blocks = Vec::new();

    for entry in timeline {
        match entry {
            TimelineEntry::Message(message) => {
                let speaker = match message.author {
                    Author::User => "Tú",
                    Author::Bot => "Bot",
                };
                blocks.push(format!(
                    "{speaker}:\n{}",
                    render_message(&message.text).to_plain_text()
                ));
            }
            TimelineEntry::Events { events, .. } => {
                let Some(grid) = render_event_list(events) else {
                    continue;
                };
                for card in grid.cards {
                    let mut block = format!(
                        "  [{} | {}] {}\n  {}\n  {}",
                        card.price, card.category, card.title, card.when, card.location
                    );
                    if let Some(description) = card.description {
                        block.push_str(&format!("\n  {description}"));
                    }
                    blocks.push(block);
                }
            }
        }
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ChatMessage, EventRecord};
    use uuid::Uuid;

    fn message(author: Author, text: &str, sequence: u64) -> TimelineEntry {
        TimelineEntry::Message(ChatMessage::new(author, text, sequence))
    }

    fn events() -> TimelineEntry {
        TimelineEntry::Events {
            id: Uuid::new_v4(),
            events: vec![EventRecord {
                title: "Feria".to_string(),
                date: "bad-date".to_string(),
                ..EventRecord::default()
            }],
        }
    }

    #[test]
    fn test_last_markers_mark_end_of_each_run() {
        let timeline = vec![
            message(Author::User, "hola", 0),
            message(Author::User, "¿hay eventos?", 1),
            message(Author::Bot, "sí", 2),
            message(Author::User, "gracias", 3),
        ];
        assert_eq!(last_markers(&timeline), vec![false, true, true, true]);
    }

    #[test]
    fn test_event_grid_does_not_break_run() {
        let timeline = vec![
            message(Author::Bot, "uno", 0),
            events(),
            message(Author::Bot, "dos", 1),
        ];
        assert_eq!(last_markers(&timeline), vec![false, false, true]);
    }

    #[test]
    fn test_last_markers_empty() {
        assert!(last_markers(&[]).is_empty());
    }

    #[test]
    fn test_transcript_html_marks_last() {
        let timeline = vec![
            message(Author::User, "<b>hola</b>", 0),
            message(Author::Bot, "**Hola**", 1),
        ];
        let html = transcript_html(&timeline);
        assert!(html.contains(r#"class="message user-message last""#));
        assert!(html.contains(r#"class="message bot-message last""#));
        assert!(html.contains("&lt;b&gt;hola&lt;/b&gt;"));
        assert!(html.contains("<strong>Hola</strong>"));
    }

    #[test]
    fn test_transcript_plain_includes_cards() {
        let timeline = vec![message(Author::Bot, "Mira esto", 0), events()];
        let text = transcript_plain(&timeline);
        assert!(text.starts_with("Bot:\nMira esto"));
        assert!(text.contains("] Feria"));
        assert!(text.contains("bad-date"));
    }
}
