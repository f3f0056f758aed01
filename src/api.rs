use std::fmt;

use serde::Deserialize;

use crate::model::{Difficulty, Question};

const BASE_URL: &str = "https://opentdb.com/api.php";

/// Parámetros del formulario que acaban en la URL de la petición.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    pub amount: u32,
    pub category: Option<u32>,
    pub difficulty: Difficulty,
}

impl QuizRequest {
    /// Construye la URL; categoría y dificultad se omiten cuando no hay filtro.
    pub fn url(&self) -> String {
        let mut url = format!("{BASE_URL}?amount={}", self.amount);
        if let Some(category) = self.category {
            url.push_str(&format!("&category={category}"));
        }
        if let Some(difficulty) = self.difficulty.api_value() {
            url.push_str(&format!("&difficulty={difficulty}"));
        }
        url
    }
}

/// Único error que cruza hacia la UI: la descarga o el parseo de preguntas.
/// No hay reintentos ni recuperación parcial.
#[derive(Debug)]
pub struct FetchError(String);

impl FetchError {
    fn new(message: impl Into<String>) -> Self {
        FetchError(message.into())
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FetchError {}

#[derive(Deserialize)]
struct Envelope {
    response_code: u8,
    results: Vec<ApiQuestion>,
}

#[derive(Deserialize)]
struct ApiQuestion {
    category: String,
    difficulty: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl ApiQuestion {
    /// La API codifica entidades HTML (&quot;, &amp;...) en todos los
    /// campos de texto; se decodifican al mapear.
    fn into_question(self, index: usize) -> Question {
        Question::new(
            index,
            decode(&self.category),
            self.difficulty,
            decode(&self.question),
            decode(&self.correct_answer),
            self.incorrect_answers.iter().map(|s| decode(s)).collect(),
        )
    }
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// GET bloqueante contra opentdb; pensado para ejecutarse en un hilo aparte.
pub fn fetch_questions(request: &QuizRequest) -> Result<Vec<Question>, FetchError> {
    let body = reqwest::blocking::Client::new()
        .get(request.url())
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|err| FetchError::new(format!("Failed to fetch questions: {err}")))?;
    parse_response(&body)
}

/// Parsea el sobre `{response_code, results}` y mapea cada entrada a una
/// `Question` con su posición como índice.
pub fn parse_response(body: &str) -> Result<Vec<Question>, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|err| FetchError::new(format!("Failed to fetch questions: {err}")))?;

    // response_code != 0 significa "sin resultados para esos filtros",
    // token inválido, etc. Para el usuario es lo mismo que un fallo.
    if envelope.response_code != 0 {
        return Err(FetchError::new(format!(
            "Failed to fetch questions: the trivia API returned code {} (try other settings)",
            envelope.response_code
        )));
    }

    Ok(envelope
        .results
        .into_iter()
        .enumerate()
        .map(|(index, q)| q.into_question(index))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_with_amount_only() {
        let request = QuizRequest {
            amount: 10,
            category: None,
            difficulty: Difficulty::Any,
        };
        assert_eq!(request.url(), "https://opentdb.com/api.php?amount=10");
    }

    #[test]
    fn url_with_category_and_difficulty() {
        let request = QuizRequest {
            amount: 5,
            category: Some(18),
            difficulty: Difficulty::Hard,
        };
        assert_eq!(
            request.url(),
            "https://opentdb.com/api.php?amount=5&category=18&difficulty=hard"
        );
    }

    #[test]
    fn url_with_difficulty_but_no_category() {
        let request = QuizRequest {
            amount: 1,
            category: None,
            difficulty: Difficulty::Easy,
        };
        assert_eq!(
            request.url(),
            "https://opentdb.com/api.php?amount=1&difficulty=easy"
        );
    }

    const SAMPLE: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "category": "Science &amp; Nature",
                "type": "multiple",
                "difficulty": "easy",
                "question": "What is &quot;H2O&quot;?",
                "correct_answer": "Water",
                "incorrect_answers": ["Helium", "Hydrogen peroxide", "Salt"]
            },
            {
                "category": "History",
                "type": "multiple",
                "difficulty": "medium",
                "question": "Who was the first Roman emperor?",
                "correct_answer": "Augustus",
                "incorrect_answers": ["Nero", "Julius Caesar", "Caligula"]
            }
        ]
    }"#;

    #[test]
    fn parses_the_envelope_and_assigns_indices() {
        let questions = parse_response(SAMPLE).expect("parse ok");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].index, 0);
        assert_eq!(questions[1].index, 1);
        assert_eq!(questions[1].correct_answer(), "Augustus");
        assert_eq!(questions[1].all_options.len(), 4);
    }

    #[test]
    fn decodes_html_entities_from_the_api() {
        let questions = parse_response(SAMPLE).expect("parse ok");
        assert_eq!(questions[0].category, "Science & Nature");
        assert_eq!(questions[0].prompt, "What is \"H2O\"?");
    }

    #[test]
    fn non_zero_response_code_is_an_error() {
        let body = r#"{"response_code": 1, "results": []}"#;
        let err = parse_response(body).expect_err("should fail");
        assert!(err.to_string().contains("code 1"));
    }

    #[test]
    fn malformed_json_is_wrapped_into_a_descriptive_error() {
        let err = parse_response("not json at all").expect_err("should fail");
        assert!(err.to_string().starts_with("Failed to fetch questions"));
    }
}
