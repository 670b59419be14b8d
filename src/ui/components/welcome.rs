use eframe::egui;

#[derive(Default)]
pub struct WelcomeActions {
    pub start: bool,
    pub about: bool,
}

pub fn render(ui: &mut egui::Ui, title: &str) -> WelcomeActions {
    let mut actions = WelcomeActions::default();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading(egui::RichText::new(title).size(32.0).strong());
        ui.label(egui::RichText::new("Tu guía de eventos en la ciudad de Loja").weak());
        ui.add_space(24.0);

        if ui.button("Comenzar").clicked() {
            actions.start = true;
        }
        ui.add_space(8.0);
        if ui.link("Acerca de").clicked() {
            actions.about = true;
        }
    });

    actions
}
