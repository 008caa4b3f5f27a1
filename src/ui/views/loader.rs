use egui::Context;

use crate::QuizApp;
use crate::ui::layout::centered_panel;

pub fn ui_loader(_app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new().size(32.0));
            ui.add_space(10.0);
            ui.label("Cargando preguntas...");
        });
    });
}
