use super::*;

impl QuizApp {
    /// Deja la pregunta actual lista en pantalla: sin selección y con el
    /// temporizador a 15.
    pub fn start_question(&mut self) {
        self.selected_option = None;
        self.start_timer();
        self.state = AppState::Quiz;
    }

    /// Botón "Siguiente": en la última pregunta muestra el resultado, si no
    /// avanza, repinta y reinicia la cuenta atrás.
    pub fn avanzar_a_siguiente_pregunta(&mut self) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        if quiz.is_last_question() {
            self.mostrar_resultado();
        } else {
            quiz.next_question();
            self.start_question();
        }
    }

    pub fn mostrar_resultado(&mut self) {
        self.pause_timer();
        self.state = AppState::Summary;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QuizRequest;
    use crate::model::Question;

    fn app_with_questions(n: usize) -> QuizApp {
        let questions: Vec<Question> = (0..n)
            .map(|i| {
                Question::new(
                    i,
                    "History".into(),
                    "easy".into(),
                    format!("Question {i}?"),
                    "a".into(),
                    vec!["b".into(), "c".into(), "d".into()],
                )
            })
            .collect();
        let request = QuizRequest {
            amount: n as u32,
            category: None,
            difficulty: Difficulty::Any,
        };
        let mut app = QuizApp::new();
        app.quiz = Some(Quiz::new(request, questions));
        app.start_question();
        app
    }

    #[test]
    fn starting_a_question_resets_timer_and_selection() {
        let mut app = app_with_questions(2);
        app.selected_option = Some(3);
        app.time_left = 1;
        app.timer_paused = true;

        app.start_question();
        assert_eq!(app.selected_option, None);
        assert_eq!(app.time_left, QUESTION_SECONDS);
        assert!(!app.timer_paused);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn advancing_past_the_last_question_shows_the_summary() {
        let mut app = app_with_questions(2);
        app.avanzar_a_siguiente_pregunta();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.quiz.as_ref().expect("quiz").current_index, 1);

        app.avanzar_a_siguiente_pregunta();
        assert_eq!(app.state, AppState::Summary);
        assert_eq!(app.quiz.as_ref().expect("quiz").current_index, 1);
        assert!(app.timer_paused);
    }
}
