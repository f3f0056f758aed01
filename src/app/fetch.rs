use std::sync::mpsc::{self, TryRecvError};

use super::*;
use crate::api::{self, QuizRequest};

impl QuizApp {
    fn request(&self) -> QuizRequest {
        QuizRequest {
            amount: self.amount,
            category: self.category,
            difficulty: self.difficulty,
        }
    }

    /// Lanza la descarga de preguntas en un hilo aparte y pasa a la pantalla
    /// de carga. Mientras el receptor siga vivo solo puede haber una descarga.
    pub fn start_fetch(&mut self) {
        if self.fetch_rx.is_some() {
            return;
        }

        let request = self.request();
        log::info!("descargando {} preguntas: {}", request.amount, request.url());

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);
        self.message.clear();
        self.state = AppState::Loading;

        std::thread::spawn(move || {
            let result = api::fetch_questions(&request);
            // Si hubo un reset mientras tanto, el receptor ya no existe y
            // el resultado se descarta sin más.
            let _ = tx.send(result);
        });
    }

    /// Sondea el canal en cada frame. Con éxito construye la sesión y arranca
    /// la primera pregunta; con error vuelve al formulario con el mensaje.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.fetch_rx.as_ref() else {
            return;
        };
        let received = rx.try_recv();

        match received {
            Ok(Ok(questions)) => {
                self.fetch_rx = None;
                if questions.is_empty() {
                    self.message =
                        "La API no devolvió ninguna pregunta. Prueba otros ajustes.".to_owned();
                    self.state = AppState::Settings;
                    return;
                }
                log::info!("descarga completada: {} preguntas", questions.len());
                self.quiz = Some(Quiz::new(self.request(), questions));
                self.start_question();
            }
            Ok(Err(err)) => {
                self.fetch_rx = None;
                log::error!("fallo al descargar preguntas: {err}");
                self.message = err.to_string();
                self.state = AppState::Settings;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // El hilo murió sin enviar nada (no debería pasar).
                self.fetch_rx = None;
                self.message = "Failed to fetch questions: worker thread died".to_owned();
                self.state = AppState::Settings;
            }
        }
    }
}
