mod helpers;
pub mod layout;
pub mod views;

use std::time::Duration;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultado de la descarga en curso, si la hay
        self.poll_fetch();

        // La cuenta atrás vive del repintado, no de un intervalo
        if self.state == AppState::Quiz {
            self.tick_timer();
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Settings => views::settings::ui_settings(self, ctx),
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }

        if self.confirm_quit {
            self.confirmar_salida(ctx);
        }
    }
}
