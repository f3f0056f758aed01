use egui::{Context, Spinner};

use crate::QuizApp;
use crate::ui::layout::centered_panel;

pub fn ui_loading(_app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 120.0, 320.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(40.0));
            ui.add_space(12.0);
            ui.label("Cargando preguntas…");
        });
    });

    // Que el spinner gire aunque no haya eventos de entrada
    ctx.request_repaint();
}
