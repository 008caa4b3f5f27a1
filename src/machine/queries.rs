use crate::model::Question;

use super::QuizState;

// Valores derivados: siempre se recalculan desde `questions`,
// nunca se guardan en el estado.
impl QuizState {
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Suma de los puntos de todo el banco.
    pub fn max_possible_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Pregunta en la posición actual, si la hay.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }
}
