use egui::{Context, RichText};

use crate::QuizApp;
use crate::machine::Action;
use crate::ui::layout::{centered_panel, wide_button};

pub fn ui_finish(app: &mut QuizApp, ctx: &Context) {
    let points = app.state.points;
    let max_points = app.state.max_possible_points();
    let highscore = app.state.highscore;
    let percentage = if max_points > 0 {
        (points as f32 / max_points as f32 * 100.0).ceil() as u32
    } else {
        0
    };

    centered_panel(ctx, 260.0, 540.0, |ui| {
        let content_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("¡Fin del quiz!");
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "Has conseguido {points} de {max_points} puntos ({percentage}%)"
                ))
                .size(16.0),
            );
            ui.add_space(6.0);
            ui.label(format!("🥇 Récord de la sesión: {highscore} puntos"));
            ui.add_space(18.0);
        });

        if wide_button(ui, content_width, "🔄 Reiniciar quiz") {
            app.dispatch(Action::Restart);
        }
    });
}
