use std::sync::mpsc::Receiver;
use std::time::Instant;

use crate::api::FetchError;
use crate::model::{AppState, Difficulty, Question};
use crate::quiz::Quiz;
use eframe::egui;

// Submódulos
pub mod actions;
pub mod fetch;
pub mod navigation;
pub mod resets;
pub mod timer;
pub mod view_models;

pub use timer::QUESTION_SECONDS;

/// Orquestador: formulario, sesión de quiz, temporizador y descarga en curso.
pub struct QuizApp {
    // Formulario de ajustes
    pub amount: u32,
    pub category: Option<u32>,
    pub difficulty: Difficulty,

    // Sesión
    pub quiz: Option<Quiz>,
    pub state: AppState,
    pub selected_option: Option<usize>,
    pub message: String,

    // Temporizador de la pregunta actual
    pub time_left: u32,
    pub timer_paused: bool,
    pub last_tick: Option<Instant>,

    // Descarga de preguntas en segundo plano
    pub fetch_rx: Option<Receiver<Result<Vec<Question>, FetchError>>>,

    pub confirm_quit: bool,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            amount: 10,
            category: None,
            difficulty: Difficulty::Any,
            quiz: None,
            state: AppState::Settings,
            selected_option: None,
            message: String::new(),
            time_left: QUESTION_SECONDS,
            timer_paused: false,
            last_tick: None,
            fetch_rx: None,
            confirm_quit: false,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
