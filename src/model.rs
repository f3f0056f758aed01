use serde::{Deserialize, Serialize};

/// Dificultad que se manda a la API (la API espera minúsculas en inglés).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Any,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Valor del parámetro `difficulty` de la URL; `None` = sin filtro.
    pub fn api_value(self) -> Option<&'static str> {
        match self {
            Difficulty::Any => None,
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Any => "Cualquiera",
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Any
    }
}

/// Categorías de opentdb con su id numérico; `None` = cualquier categoría.
pub const CATEGORIES: [(Option<u32>, &str); 10] = [
    (None, "Any Category"),
    (Some(9), "General Knowledge"),
    (Some(11), "Entertainment: Film"),
    (Some(12), "Entertainment: Music"),
    (Some(15), "Entertainment: Video Games"),
    (Some(17), "Science & Nature"),
    (Some(18), "Science: Computers"),
    (Some(21), "Sports"),
    (Some(22), "Geography"),
    (Some(23), "History"),
];

pub fn category_label(category: Option<u32>) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(value, _)| *value == category)
        .map(|(_, label)| *label)
        .unwrap_or("Any Category")
}

#[derive(Debug, Clone)]
pub struct Question {
    pub index: usize, // posición dentro del quiz, empezando en 0
    pub category: String,
    pub difficulty: String,
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub all_options: Vec<String>,
    pub answered: bool,
}

impl Question {
    pub fn new(
        index: usize,
        category: String,
        difficulty: String,
        prompt: String,
        correct_answer: String,
        incorrect_answers: Vec<String>,
    ) -> Self {
        let all_options = Self::shuffle_options(&correct_answer, &incorrect_answers);
        Self {
            index,
            category,
            difficulty,
            prompt,
            correct_answer,
            incorrect_answers,
            all_options,
            answered: false,
        }
    }

    /// Ordena las 4 opciones alfabéticamente. El original hacía exactamente
    /// esto (un `sort`, no un shuffle aleatorio); se conserva el orden
    /// determinista por pregunta.
    fn shuffle_options(correct: &str, incorrect: &[String]) -> Vec<String> {
        let mut options: Vec<String> = incorrect.to_vec();
        options.push(correct.to_owned());
        options.sort();
        options
    }

    /// Primera llamada: marca la pregunta como respondida y devuelve si la
    /// opción es la correcta. Llamadas posteriores devuelven `None` para que
    /// nunca se puntúe dos veces.
    pub fn check_answer(&mut self, selected: &str) -> Option<bool> {
        if self.answered {
            return None;
        }
        self.answered = true;
        Some(selected == self.correct_answer)
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResults {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Settings,
    Loading,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::new(
            0,
            "Science: Computers".into(),
            "easy".into(),
            "What does CPU stand for?".into(),
            "Central Processing Unit".into(),
            vec![
                "Central Process Unit".into(),
                "Computer Personal Unit".into(),
                "Central Processor Unit".into(),
            ],
        )
    }

    #[test]
    fn options_are_four_sorted_and_contain_the_correct_one_once() {
        let q = sample_question();
        assert_eq!(q.all_options.len(), 4);

        let mut sorted = q.all_options.clone();
        sorted.sort();
        assert_eq!(q.all_options, sorted);

        let hits = q
            .all_options
            .iter()
            .filter(|o| *o == &q.correct_answer)
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn check_answer_scores_once_and_then_returns_none() {
        let mut q = sample_question();
        assert_eq!(q.check_answer("Central Processing Unit"), Some(true));
        assert!(q.answered);
        assert_eq!(q.check_answer("Central Processing Unit"), None);
        assert_eq!(q.check_answer("Computer Personal Unit"), None);
        assert!(q.answered);
    }

    #[test]
    fn check_answer_detects_a_wrong_option() {
        let mut q = sample_question();
        assert_eq!(q.check_answer("Computer Personal Unit"), Some(false));
        assert!(q.answered);
    }

    #[test]
    fn difficulty_api_values() {
        assert_eq!(Difficulty::Any.api_value(), None);
        assert_eq!(Difficulty::Easy.api_value(), Some("easy"));
        assert_eq!(Difficulty::Hard.api_value(), Some("hard"));
    }

    #[test]
    fn category_label_falls_back_to_any() {
        assert_eq!(category_label(Some(9)), "General Knowledge");
        assert_eq!(category_label(None), "Any Category");
        assert_eq!(category_label(Some(999)), "Any Category");
    }
}
