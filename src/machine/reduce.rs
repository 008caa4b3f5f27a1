use crate::model::Status;

use super::{Action, QuizState};

/// Transición pura de la máquina de estados: `(estado, acción) -> estado`.
///
/// No hace I/O, no consulta el reloj ni nada aleatorio: con las mismas
/// entradas devuelve siempre el mismo estado nuevo, y el anterior queda
/// descartado. La legalidad de la secuencia (no arrancar sin banco, no
/// terminar antes de la última pregunta...) es responsabilidad de quien
/// despacha; aquí cada acción aplica su efecto mecánicamente.
pub fn reduce(state: &QuizState, action: &Action) -> QuizState {
    match action {
        Action::DataReceived(questions) => QuizState {
            questions: questions.clone(),
            status: Status::Ready,
            ..state.clone()
        },
        Action::DataFailed => QuizState {
            status: Status::Error,
            ..state.clone()
        },
        Action::Start => QuizState {
            status: Status::Active,
            ..state.clone()
        },
        Action::NewAnswer(chosen) => {
            // Cada pregunta puntúa como mucho una vez: si ya hay respuesta
            // registrada, la acción no cambia nada.
            if state.answer.is_some() {
                return state.clone();
            }
            let question = &state.questions[state.index];
            let points = if *chosen == question.correct_option {
                state.points + question.points
            } else {
                state.points
            };
            QuizState {
                answer: Some(*chosen),
                points,
                ..state.clone()
            }
        }
        Action::NextQuestion => QuizState {
            index: state.index + 1,
            answer: None,
            ..state.clone()
        },
        Action::Finish => QuizState {
            status: Status::Finished,
            highscore: state.points.max(state.highscore),
            ..state.clone()
        },
        Action::Restart => QuizState {
            questions: state.questions.clone(),
            status: Status::Ready,
            highscore: state.highscore,
            ..QuizState::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn bank() -> Vec<Question> {
        vec![
            Question {
                id: "q1".into(),
                question: "¿2 + 2?".into(),
                options: vec!["3".into(), "4".into()],
                correct_option: 1,
                points: 10,
            },
            Question {
                id: "q2".into(),
                question: "¿Capital de Francia?".into(),
                options: vec!["París".into(), "Berlín".into()],
                correct_option: 0,
                points: 20,
            },
        ]
    }

    fn loaded() -> QuizState {
        reduce(&QuizState::default(), &Action::DataReceived(bank()))
    }

    fn active() -> QuizState {
        reduce(&loaded(), &Action::Start)
    }

    #[test]
    fn data_received_stores_the_bank_and_moves_to_ready() {
        let state = loaded();
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.questions, bank());
        assert_eq!(state.points, 0);
    }

    #[test]
    fn data_failed_only_changes_status() {
        let state = reduce(&QuizState::default(), &Action::DataFailed);
        assert_eq!(state.status, Status::Error);
        assert!(state.questions.is_empty());
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
        assert_eq!(state.points, 0);
        assert_eq!(state.highscore, 0);
    }

    #[test]
    fn source_can_retry_while_loading() {
        let failed = reduce(&QuizState::default(), &Action::DataFailed);
        let state = reduce(&failed, &Action::DataReceived(bank()));
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.questions.len(), 2);
    }

    #[test]
    fn start_activates_on_the_first_question() {
        let state = active();
        assert_eq!(state.status, Status::Active);
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
        assert_eq!(state.points, 0);
    }

    #[test]
    fn correct_answer_adds_the_question_points() {
        let state = reduce(&active(), &Action::NewAnswer(1));
        assert_eq!(state.answer, Some(1));
        assert_eq!(state.points, 10);
        assert_eq!(state.status, Status::Active);
    }

    #[test]
    fn wrong_answer_records_the_choice_without_points() {
        let state = reduce(&active(), &Action::NewAnswer(0));
        assert_eq!(state.answer, Some(0));
        assert_eq!(state.points, 0);
    }

    #[test]
    fn reanswering_the_same_question_is_ignored() {
        let answered = reduce(&active(), &Action::NewAnswer(0));
        // Acertar después de fallar no suma ni cambia la respuesta registrada
        let again = reduce(&answered, &Action::NewAnswer(1));
        assert_eq!(again, answered);
    }

    #[test]
    fn next_question_advances_and_clears_the_answer() {
        let answered = reduce(&active(), &Action::NewAnswer(1));
        let state = reduce(&answered, &Action::NextQuestion);
        assert_eq!(state.index, 1);
        assert_eq!(state.answer, None);
        assert_eq!(state.points, 10);
        assert_eq!(state.status, Status::Active);
    }

    #[test]
    fn finish_records_the_session_highscore() {
        let answered = reduce(&active(), &Action::NewAnswer(1));
        let state = reduce(&answered, &Action::Finish);
        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.highscore, 10);
    }

    #[test]
    fn finish_with_a_lower_score_keeps_the_previous_highscore() {
        let mut state = active();
        state.highscore = 25;
        let state = reduce(&state, &Action::Finish);
        assert_eq!(state.highscore, 25);
    }

    #[test]
    fn restart_keeps_the_bank_and_the_highscore() {
        let finished = QuizState {
            status: Status::Finished,
            index: 1,
            answer: Some(1),
            points: 10,
            highscore: 10,
            ..loaded()
        };
        let state = reduce(&finished, &Action::Restart);
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.questions, bank());
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
        assert_eq!(state.points, 0);
        assert_eq!(state.highscore, 10);
    }

    #[test]
    fn restart_forces_ready_from_the_error_status() {
        let mut state = reduce(&loaded(), &Action::Start);
        state.status = Status::Error;
        let state = reduce(&state, &Action::Restart);
        assert_eq!(state.status, Status::Ready);
    }

    #[test]
    fn reduce_is_deterministic() {
        let state = reduce(&active(), &Action::NewAnswer(1));
        for action in [
            Action::DataReceived(bank()),
            Action::DataFailed,
            Action::Start,
            Action::NewAnswer(0),
            Action::NextQuestion,
            Action::Finish,
            Action::Restart,
        ] {
            assert_eq!(reduce(&state, &action), reduce(&state, &action));
        }
    }

    #[test]
    fn points_stay_within_the_bank_maximum() {
        // Acertar todas deja la puntuación exactamente en el máximo derivado
        let mut state = active();
        loop {
            let correct = state.questions[state.index].correct_option;
            state = reduce(&state, &Action::NewAnswer(correct));
            assert!(state.points <= state.max_possible_points());
            if state.index + 1 == state.questions.len() {
                break;
            }
            state = reduce(&state, &Action::NextQuestion);
        }
        let state = reduce(&state, &Action::Finish);
        assert_eq!(state.points, state.max_possible_points());
        assert_eq!(state.highscore, 30);
    }

    #[test]
    fn full_round_matches_the_expected_scoring() {
        // Ronda completa: acierto en la primera, fallo en la segunda
        let mut state = active();
        state = reduce(&state, &Action::NewAnswer(1));
        assert_eq!(state.points, 10);
        state = reduce(&state, &Action::NextQuestion);
        assert_eq!((state.index, state.answer), (1, None));
        state = reduce(&state, &Action::NewAnswer(1));
        assert_eq!(state.points, 10);
        state = reduce(&state, &Action::Finish);
        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.highscore, 10);

        // Una segunda vuelta mejor sube el récord
        let mut state = reduce(&state, &Action::Restart);
        state = reduce(&state, &Action::Start);
        state = reduce(&state, &Action::NewAnswer(1));
        state = reduce(&state, &Action::NextQuestion);
        state = reduce(&state, &Action::NewAnswer(0));
        let state = reduce(&state, &Action::Finish);
        assert_eq!(state.points, 30);
        assert_eq!(state.highscore, 30);
    }
}
