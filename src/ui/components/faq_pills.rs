use eframe::egui;

use crate::ui::state::{FAQ_QUESTIONS, FaqQuestion};

pub fn render(ui: &mut egui::Ui, enabled: bool) -> Option<FaqQuestion> {
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        for faq in FAQ_QUESTIONS {
            let pill = egui::Button::new(faq.text).corner_radius(egui::CornerRadius::same(14));
            if ui.add_enabled(enabled, pill).clicked() {
                picked = Some(faq);
            }
        }
    });

    picked
}
