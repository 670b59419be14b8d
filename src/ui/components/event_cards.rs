use eframe::egui;
use uuid::Uuid;

use crate::common::EventRecord;
use crate::render::{EventCard, render_event_list};
use crate::ui::state::AppState;

const CARD_WIDTH: f32 = 220.0;
const FADE_SECS: f32 = 0.45;

#[derive(Default)]
pub struct EventCardsActions {
    pub clicked: Option<usize>,
    /// Card lần đầu lọt vào vùng nhìn thấy trong frame này
    pub newly_visible: Vec<usize>,
}

pub fn render(
    ui: &mut egui::Ui,
    grid_id: Uuid,
    events: &[EventRecord],
    state: &AppState,
) -> EventCardsActions {
    let mut actions = EventCardsActions::default();
    let Some(grid) = render_event_list(events) else {
        return actions;
    };

    ui.horizontal_wrapped(|ui| {
        for (index, card) in grid.cards.iter().enumerate() {
            let revealed = state.is_card_revealed(grid_id, index);
            let opacity = ui.ctx().animate_bool_with_time(
                egui::Id::new(("event_card", grid_id, index)),
                revealed,
                FADE_SECS,
            );

            let response = ui
                .scope(|ui| {
                    ui.multiply_opacity(opacity);
                    card_frame(ui, card)
                })
                .inner;

            if !revealed && ui.is_rect_visible(response.rect) {
                actions.newly_visible.push(index);
            }
            if response.clicked() {
                actions.clicked = Some(index);
            }
        }
    });

    actions
}

fn card_frame(ui: &mut egui::Ui, card: &EventCard) -> egui::Response {
    let inner = egui::Frame::new()
        .fill(egui::Color32::from_rgb(28, 30, 48))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(70, 80, 140)))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            ui.horizontal(|ui| {
                chip(ui, &card.price, egui::Color32::from_rgb(40, 120, 90));
                chip(ui, &card.category, egui::Color32::from_rgb(120, 60, 130));
            });
            ui.label(egui::RichText::new(card.when.as_str()).small().weak());
            ui.label(egui::RichText::new(card.title.as_str()).size(16.0).strong());
            ui.label(card.location.as_str());
            if let Some(description) = &card.description {
                ui.label(egui::RichText::new(description.as_str()).small());
            }
        });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text("Ver más información")
}

fn chip(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    if text.is_empty() {
        return;
    }
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(egui::Color32::WHITE));
        });
}
