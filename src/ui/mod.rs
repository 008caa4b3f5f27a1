pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::QuizApp;
use crate::model::Status;
use layout::bottom_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_source();

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state.status {
            Status::Loading => views::loader::ui_loader(self, ctx),
            Status::Error => views::error::ui_error(self, ctx),
            Status::Ready => views::start::ui_start(self, ctx),
            Status::Active => views::quiz::ui_quiz(self, ctx),
            Status::Finished => views::finish::ui_finish(self, ctx),
        }

        if self.state.status == Status::Loading {
            // Repinta mientras esperamos a la fuente de preguntas
            ctx.request_repaint();
        }
    }
}
