use std::sync::mpsc::Receiver;

use crate::machine::{Action, QuizState, reduce};
use crate::model::Status;
use crate::source;

/// La aplicación: un único `QuizState` y el canal de la fuente de preguntas.
/// Todas las acciones se aplican en serie desde el hilo de la UI, una entera
/// antes de leer la siguiente.
pub struct QuizApp {
    pub state: QuizState,
    source_rx: Option<Receiver<Action>>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            state: QuizState::default(),
            source_rx: Some(source::spawn_load()),
        }
    }

    /// Único punto de entrada de acciones: el estado se reemplaza entero.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action);
        if next.status != self.state.status {
            log::info!("status {:?} -> {:?}", self.state.status, next.status);
        }
        self.state = next;
    }

    /// Sondea la fuente mientras seguimos en `Loading`; llegará una única
    /// acción y el canal deja de hacer falta.
    pub fn poll_source(&mut self) {
        if self.state.status != Status::Loading {
            return;
        }
        let action = self.source_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(action) = action {
            self.source_rx = None;
            self.dispatch(action);
        }
    }
}
