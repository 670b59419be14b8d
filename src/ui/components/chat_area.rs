use eframe::egui;

use crate::common::{Author, ChatMessage, TimelineEntry};
use crate::render::markup::RenderedLine;
use crate::render::{detail_query, icon_glyph, last_markers, render_message};
use crate::ui::state::AppState;

use super::event_cards;

#[derive(Default)]
pub struct ChatAreaActions {
    /// Text cần gửi khi người dùng bấm vào một event card
    pub card_query: Option<String>,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> ChatAreaActions {
    let mut actions = ChatAreaActions::default();
    let mut reveals = Vec::new();
    let markers = last_markers(&state.timeline);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (entry, is_last) in state.timeline.iter().zip(markers) {
                match entry {
                    TimelineEntry::Message(message) => message_bubble(ui, message, is_last),
                    TimelineEntry::Events { id, events } => {
                        let cards = event_cards::render(ui, *id, events, state);
                        reveals.extend(cards.newly_visible.into_iter().map(|index| (*id, index)));
                        if let Some(record) = cards.clicked.and_then(|index| events.get(index)) {
                            actions.card_query = Some(detail_query(record));
                        }
                        ui.add_space(10.0);
                    }
                }
            }

            if state.is_typing() {
                typing_indicator(ui);
            }
        });

    for (grid_id, index) in reveals {
        state.reveal_card(grid_id, index);
    }

    actions
}

fn message_bubble(ui: &mut egui::Ui, message: &ChatMessage, is_last: bool) {
    let block = render_message(&message.text);
    let (fill, align) = match message.author {
        Author::User => (egui::Color32::from_rgb(38, 78, 140), egui::Align::Max),
        Author::Bot => (egui::Color32::from_gray(48), egui::Align::Min),
    };

    // Tin cuối của một chuỗi có "đuôi" ở góc dưới
    let mut corners = egui::CornerRadius::same(12);
    if is_last {
        match message.author {
            Author::User => corners.se = 2,
            Author::Bot => corners.sw = 2,
        }
    }

    ui.push_id(message.id, |ui| {
        ui.with_layout(egui::Layout::top_down(align), |ui| {
            let max_width = ui.available_width() * 0.8;
            egui::Frame::new()
                .fill(fill)
                .corner_radius(corners)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_max_width(max_width);
                    for line in &block.lines {
                        message_line(ui, line);
                    }
                })
                .response
                .on_hover_text(
                    message
                        .created_at
                        .with_timezone(&chrono::Local)
                        .format("%H:%M")
                        .to_string(),
                );
        });
    });

    ui.add_space(if is_last { 10.0 } else { 2.0 });
}

fn message_line(ui: &mut egui::Ui, line: &RenderedLine) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        if let Some(kind) = line.line.icon_kind() {
            ui.label(format!("{} ", icon_glyph(kind)));
        }
        for segment in line.segments() {
            let text = egui::RichText::new(segment.text).color(egui::Color32::WHITE);
            ui.label(if segment.bold { text.strong() } else { text });
        }
    });
}

fn typing_indicator(ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        egui::Frame::new()
            .fill(egui::Color32::from_gray(48))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Escribiendo…").weak());
                });
            });
    });
}
