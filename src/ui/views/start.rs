use egui::{Context, RichText};

use crate::QuizApp;
use crate::machine::Action;
use crate::ui::layout::{centered_panel, wide_button};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    let num_questions = app.state.num_questions();

    centered_panel(ctx, 230.0, 540.0, |ui| {
        let content_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("¡Bienvenido al Quiz de Rust!");
            ui.add_space(8.0);
            ui.label(RichText::new(format!(
                "{num_questions} preguntas para ponerte a prueba"
            )));
            ui.add_space(18.0);
        });

        if wide_button(ui, content_width, "▶ Empezar") {
            app.dispatch(Action::Start);
        }
    });
}
