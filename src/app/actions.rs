use super::*;

impl QuizApp {
    /// El usuario pulsa una opción. Solo la primera pulsación por pregunta
    /// cuenta: `check_answer` devuelve `None` si ya estaba respondida y
    /// entonces no se toca nada.
    pub fn procesar_respuesta(&mut self, option_index: usize) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };

        let correcta = {
            let Some(question) = quiz.current_question_mut() else {
                return;
            };
            let Some(selected) = question.all_options.get(option_index).cloned() else {
                return;
            };
            match question.check_answer(&selected) {
                Some(result) => result,
                None => return, // ya respondida
            }
        };

        self.selected_option = Some(option_index);
        if correcta {
            quiz.increment_score();
        }
        self.pause_timer();
    }

    /// La cuenta atrás llegó a 0 sin selección: se revela la correcta como
    /// si hubiera fallado, pero sin puntuar.
    pub fn handle_timeout(&mut self) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        let Some(question) = quiz.current_question_mut() else {
            return;
        };
        if !question.answered {
            question.answered = true;
        }
        self.pause_timer();
    }
}
