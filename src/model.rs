use serde::{Deserialize, Serialize};

/// Una pregunta del banco. El orden del quiz es la posición en la secuencia;
/// `id` es solo un identificador opaco.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(default)]
    pub id: String,
    pub question: String, // Enunciado
    pub options: Vec<String>,
    // El endpoint remoto sirve camelCase; el banco embebido usa snake_case
    #[serde(alias = "correctOption")]
    pub correct_option: usize,
    pub points: u32,
}

/// Fase de la sesión de quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Error,
    Ready,
    Active,
    Finished,
}

impl Default for Status {
    fn default() -> Self {
        Status::Loading
    }
}
