use super::*;
use crate::view_models::{OptionRow, OptionState, QuestionView};

const LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

impl QuizApp {
    /// Aplana la pregunta actual a lo que la vista pinta: número, textos y
    /// el estado de cada opción según selección / revelado.
    pub fn question_view(&self) -> Option<QuestionView> {
        let quiz = self.quiz.as_ref()?;
        let question = quiz.current_question()?;

        let options = question
            .all_options
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let state = if !question.answered {
                    OptionState::Selectable
                } else if text == &question.correct_answer {
                    OptionState::Correct
                } else if self.selected_option == Some(idx) {
                    OptionState::Wrong
                } else {
                    OptionState::Disabled
                };
                OptionRow {
                    letter: LETTERS.get(idx).copied().unwrap_or('?'),
                    text: text.clone(),
                    state,
                }
            })
            .collect();

        Some(QuestionView {
            number: question.index + 1,
            total: quiz.total(),
            category: question.category.clone(),
            prompt: question.prompt.clone(),
            score: quiz.score,
            progress: quiz.progress(),
            answered: question.answered,
            is_last: quiz.is_last_question(),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QuizRequest;
    use crate::model::Question;

    fn app() -> QuizApp {
        // Orden alfabético: Athens, Berlin, Madrid, Paris
        let question = Question::new(
            0,
            "Geography".into(),
            "easy".into(),
            "Capital of France?".into(),
            "Paris".into(),
            vec!["Madrid".into(), "Berlin".into(), "Athens".into()],
        );
        let mut app = QuizApp::new();
        app.quiz = Some(Quiz::new(
            QuizRequest {
                amount: 1,
                category: None,
                difficulty: Difficulty::Any,
            },
            vec![question],
        ));
        app.start_question();
        app
    }

    #[test]
    fn before_answering_every_option_is_selectable() {
        let app = app();
        let view = app.question_view().expect("view");
        assert_eq!(view.number, 1);
        assert!(view.is_last);
        assert!(!view.answered);
        assert_eq!(view.options.len(), 4);
        assert!(
            view.options
                .iter()
                .all(|o| o.state == OptionState::Selectable)
        );
        assert_eq!(view.options[0].letter, 'a');
        assert_eq!(view.options[3].letter, 'd');
    }

    #[test]
    fn wrong_selection_reveals_both_colors() {
        let mut app = app();
        app.procesar_respuesta(1); // "Berlin", incorrecta

        let view = app.question_view().expect("view");
        assert!(view.answered);
        assert_eq!(view.options[1].state, OptionState::Wrong);
        assert_eq!(view.options[3].state, OptionState::Correct); // "Paris"
        assert_eq!(view.options[0].state, OptionState::Disabled);
        assert_eq!(view.options[2].state, OptionState::Disabled);
    }

    #[test]
    fn timeout_reveals_only_the_correct_option() {
        let mut app = app();
        app.handle_timeout();

        let view = app.question_view().expect("view");
        assert_eq!(view.options[3].state, OptionState::Correct);
        assert!(
            view.options[..3]
                .iter()
                .all(|o| o.state == OptionState::Disabled)
        );
    }
}
