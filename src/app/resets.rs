use super::*;

impl QuizApp {
    /// Reset duro: sustituye el valor entero, como hacía el original con un
    /// reload de página. Descarta quiz, temporizador y cualquier descarga
    /// pendiente (su canal muere aquí).
    pub fn reset_app(&mut self) {
        *self = QuizApp::new();
    }

    pub fn jugar_de_nuevo(&mut self) {
        self.reset_app();
    }

    /// Modal de confirmación de abandono.
    pub fn confirmar_salida(&mut self, ctx: &egui::Context) {
        egui::Window::new("Abandonar quiz")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres abandonar? Perderás la puntuación actual.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Sí, abandonar").clicked() {
                        self.reset_app();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_quit = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QuizRequest;
    use crate::model::Question;

    #[test]
    fn reset_returns_to_a_fresh_settings_screen() {
        let mut app = QuizApp::new();
        app.quiz = Some(Quiz::new(
            QuizRequest {
                amount: 1,
                category: Some(9),
                difficulty: Difficulty::Hard,
            },
            vec![Question::new(
                0,
                "General Knowledge".into(),
                "hard".into(),
                "Q?".into(),
                "a".into(),
                vec!["b".into(), "c".into(), "d".into()],
            )],
        ));
        app.start_question();
        app.procesar_respuesta(0);
        app.confirm_quit = true;
        app.message = "algo".into();

        app.reset_app();
        assert!(app.quiz.is_none());
        assert_eq!(app.state, AppState::Settings);
        assert!(!app.confirm_quit);
        assert!(app.message.is_empty());
        assert!(app.fetch_rx.is_none());
        assert_eq!(app.amount, 10);
    }
}
