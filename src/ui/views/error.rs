use egui::Context;

use crate::QuizApp;
use crate::ui::layout::centered_panel;

pub fn ui_error(_app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 140.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("💥 No se pudieron cargar las preguntas");
            ui.add_space(10.0);
            ui.label("Comprueba la conexión y vuelve a abrir la aplicación.");
        });
    });
}
