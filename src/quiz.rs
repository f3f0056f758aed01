use crate::api::QuizRequest;
use crate::model::{Question, QuizResults};

/// Sesión de quiz: las preguntas ya descargadas, la posición actual y la
/// puntuación. Las preguntas no cambian una vez construida la sesión.
pub struct Quiz {
    pub request: QuizRequest,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: u32,
}

impl Quiz {
    pub fn new(request: QuizRequest, questions: Vec<Question>) -> Self {
        Self {
            request,
            questions,
            current_index: 0,
            score: 0,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_question_mut(&mut self) -> Option<&mut Question> {
        self.questions.get_mut(self.current_index)
    }

    /// Avanza a la siguiente pregunta si no estamos ya en la última.
    /// Devuelve si ha avanzado.
    pub fn next_question(&mut self) -> bool {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Porcentaje recorrido de la sesión, 0..100. El original dividía entre
    /// `total - 1` sin más; con una sola pregunta eso es NaN, así que aquí
    /// devolvemos 0 en ese caso.
    pub fn progress(&self) -> f32 {
        let total = self.questions.len();
        if total <= 1 {
            return 0.0;
        }
        self.current_index as f32 / (total - 1) as f32 * 100.0
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn results(&self) -> QuizResults {
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (self.score as f32 / total as f32 * 100.0).round() as u32
        };
        QuizResults {
            score: self.score,
            total,
            percentage,
        }
    }

    pub fn reset(&mut self) {
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
    }
}
