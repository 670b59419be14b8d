use eframe::egui;

/// Trả về nội dung ô nhập khi người dùng bấm gửi hoặc Enter.
/// Việc trim và xoá ô nhập do `AppState::begin_send` đảm nhận.
pub fn render(ui: &mut egui::Ui, input_text: &mut String, enabled: bool) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(input_text)
                .hint_text("Escribe tu pregunta...")
                .desired_width(ui.available_width() - 80.0),
        );
        if ui.add_enabled(enabled, egui::Button::new("Enviar")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send && enabled {
        return Some(input_text.clone());
    }

    None
}
