use egui::{Button, CentralPanel, Color32, Context, ProgressBar, RichText};

use crate::QuizApp;
use crate::machine::Action;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let question = match app.state.current_question() {
        Some(q) => q.clone(),
        None => return,
    };
    let num_questions = app.state.num_questions();
    let max_points = app.state.max_possible_points();
    let index = app.state.index;
    let answer = app.state.answer;
    let is_last = app.state.is_last_question();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 90.0 + 60.0 + question.options.len() as f32 * 48.0 + 56.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.set_width(panel_width);
                ui.vertical_centered(|ui| {
                    // ----------- CABECERA DE PROGRESO -----------
                    ui.add(ProgressBar::new(index as f32 / num_questions as f32).desired_height(8.0));
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("Pregunta {} / {}", index + 1, num_questions)).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format!("{} / {} puntos", app.state.points, max_points));
                        });
                    });

                    ui.add_space(14.0);
                    ui.heading(&question.question);
                    ui.add_space(14.0);

                    // ----------- OPCIONES -----------
                    let btn_w = panel_width * 0.9;
                    for (i, option) in question.options.iter().enumerate() {
                        let mut button = Button::new(RichText::new(option).size(15.0));
                        if let Some(chosen) = answer {
                            // Con respuesta: se revela la correcta y la elegida
                            if i == question.correct_option {
                                button = button.fill(Color32::DARK_GREEN);
                            } else if i == chosen {
                                button = button.fill(Color32::DARK_RED);
                            }
                            let _ = ui.add_enabled(false, button.min_size([btn_w, 40.0].into()));
                        } else if ui.add_sized([btn_w, 40.0], button).clicked() {
                            app.dispatch(Action::NewAnswer(i));
                        }
                        ui.add_space(5.0);
                    }

                    // ----------- SIGUIENTE / TERMINAR -----------
                    // Solo con la pregunta ya respondida
                    if answer.is_some() {
                        ui.add_space(8.0);
                        let label = if is_last { "🏁 Terminar" } else { "Siguiente ➡" };
                        if ui.add_sized([btn_w / 2.0, 36.0], Button::new(label)).clicked() {
                            if is_last {
                                app.dispatch(Action::Finish);
                            } else {
                                app.dispatch(Action::NextQuestion);
                            }
                        }
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
