use egui::{Context, RichText};

use crate::QuizApp;
use crate::model::AppState;
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    let Some(results) = app.quiz.as_ref().map(|quiz| quiz.results()) else {
        app.state = AppState::Settings;
        return;
    };

    centered_panel(ctx, 260.0, 440.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎉 ¡Quiz terminado!");
            ui.add_space(16.0);

            ui.label(
                RichText::new(format!("You scored: {}/{}", results.score, results.total))
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(format!("Aciertos: {}%", results.percentage));
            ui.add_space(24.0);

            let panel_width = ui.available_width().min(360.0);
            let (again, quit) = two_button_row(ui, panel_width, "🔄 Jugar otra vez", "🔙 Salir");
            if again {
                app.jugar_de_nuevo();
            }
            if quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
