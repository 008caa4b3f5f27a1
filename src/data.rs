// src/data.rs

use crate::model::Question;

/// Carga el banco de preguntas desde el YAML embebido en el binario.
/// Un banco ilegible no es un pánico: la fuente lo convierte en `DataFailed`.
pub fn read_questions_embedded() -> Result<Vec<Question>, serde_yaml::Error> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content)
}
