use eframe::egui;

/// Trả về `true` khi người dùng bấm "Volver".
pub fn render(ui: &mut egui::Ui) -> bool {
    let mut back = false;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Acerca de");
        ui.add_space(12.0);
        ui.label(
            "Un asistente conversacional para descubrir conciertos, ferias, obras de teatro \
             y demás eventos de la ciudad de Loja.",
        );
        ui.label("Pregunta por fecha, categoría, lugar o precio y te mostramos los eventos.");
        ui.add_space(24.0);

        if ui.button("Volver").clicked() {
            back = true;
        }
    });

    back
}
