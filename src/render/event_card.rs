use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

use crate::common::EventRecord;

use super::markup::escape;

pub const DESCRIPTION_MAX_CHARS: usize = 140;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Debug, Error)]
#[error("event date `{raw}` is not DD/MM/YYYY HH:MM: {source}")]
pub struct DateParseError {
    raw: String,
    #[source]
    source: chrono::ParseError,
}

/// `"15/11/2025 19:30"` -> `"15 de noviembre de 2025, 7:30 PM"`.
/// Ngày giữ nguyên như chuỗi gốc (`"01"` vẫn là `"01"`). Giây bị bỏ qua,
/// thiếu phần giờ thì coi như 00:00.
pub fn format_event_date(raw: &str) -> Result<String, DateParseError> {
    let trimmed = raw.trim();
    let (date_part, time_part) = match trimmed.split_once(' ') {
        Some((date, time)) => (date, Some(time.trim())),
        None => (trimmed, None),
    };
    let to_error = |source| DateParseError {
        raw: raw.to_string(),
        source,
    };

    let date = NaiveDate::parse_from_str(date_part, "%d/%m/%Y").map_err(to_error)?;
    let time = match time_part {
        Some(time) => NaiveTime::parse_from_str(time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
            .map_err(to_error)?,
        None => NaiveTime::MIN,
    };
    let day_text = date_part.split('/').next().unwrap_or_default();

    let (is_pm, hour12) = time.hour12();
    Ok(format!(
        "{} de {} de {}, {}:{:02} {}",
        day_text,
        MONTHS[date.month0() as usize],
        date.year(),
        hour12,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    ))
}

/// Như `format_event_date`, nhưng lỗi thì trả lại nguyên chuỗi gốc.
pub fn display_date(raw: &str) -> String {
    match format_event_date(raw) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::debug!("Showing raw event date: {err}");
            raw.to_string()
        }
    }
}

pub fn truncate_description(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > DESCRIPTION_MAX_CHARS {
        let mut cut: String = trimmed.chars().take(DESCRIPTION_MAX_CHARS).collect();
        cut.push('…');
        cut
    } else {
        trimmed.to_string()
    }
}

/// Dữ liệu hiển thị của một card, đã format sẵn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub location: String,
    pub when: String,
    pub price: String,
    pub category: String,
    pub description: Option<String>,
}

impl EventCard {
    pub fn from_record(record: &EventRecord) -> Self {
        let description = record
            .description
            .as_deref()
            .map(truncate_description)
            .filter(|text| !text.is_empty());

        Self {
            title: record.title.clone(),
            location: record.location.clone(),
            when: display_date(&record.date),
            price: record.price.clone(),
            category: record.category.clone(),
            description,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(
            r#"<article class="event-card"><div class="event-card__content"><div class="event-card__body">"#,
        );
        html.push_str(&format!(
            r#"<div class="event-card__chips"><span class="event-card__chip event-card__chip--price">{}</span><span class="event-card__chip event-card__chip--category">{}</span></div>"#,
            escape(&self.price),
            escape(&self.category)
        ));
        html.push_str(&format!(
            r#"<p class="event-card__datetime">{}</p>"#,
            escape(&self.when)
        ));
        html.push_str(&format!(
            r#"<h4 class="event-card__title">{}</h4>"#,
            escape(&self.title)
        ));
        html.push_str(&format!(
            r#"<p class="event-card__location">{}</p>"#,
            escape(&self.location)
        ));
        if let Some(description) = &self.description {
            html.push_str(&format!(
                r#"<p class="event-card__description">{}</p>"#,
                escape(description)
            ));
        }
        html.push_str("</div></div></article>");
        html
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGrid {
    pub cards: Vec<EventCard>,
}

impl EventGrid {
    pub fn to_html(&self) -> String {
        let cards: String = self.cards.iter().map(EventCard::to_html).collect();
        format!(
            r#"<div class="event-cards-wrapper"><div class="event-cards-grid">{cards}</div></div>"#
        )
    }
}

pub fn render_event_list(events: &[EventRecord]) -> Option<EventGrid> {
    if events.is_empty() {
        return None;
    }

    Some(EventGrid {
        cards: events.iter().map(EventCard::from_record).collect(),
    })
}

/// Tin nhắn gửi đi khi người dùng bấm vào một card.
pub fn detail_query(record: &EventRecord) -> String {
    format!("Dame más información sobre {}", record.title)
}
