use egui::{Button, Color32, ComboBox, Context, RichText, Slider};

use crate::QuizApp;
use crate::model::{CATEGORIES, Difficulty, category_label};
use crate::ui::layout::centered_panel;

pub fn ui_settings(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 380.0, 460.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🧠 Trivia Quiz");
            ui.add_space(4.0);
            ui.label("Preguntas de Open Trivia DB, 15 segundos por pregunta");
            ui.add_space(18.0);

            let content_width = ui.available_width().min(340.0);

            ui.label(format!("Total Questions: {}", app.amount));
            ui.add_space(4.0);
            ui.scope(|ui| {
                ui.spacing_mut().slider_width = content_width;
                ui.add(Slider::new(&mut app.amount, 1..=50).show_value(false));
            });
            ui.add_space(14.0);

            ComboBox::from_label("Categoría")
                .width(content_width * 0.7)
                .selected_text(category_label(app.category))
                .show_ui(ui, |ui| {
                    for (value, label) in CATEGORIES {
                        ui.selectable_value(&mut app.category, value, label);
                    }
                });
            ui.add_space(8.0);

            ComboBox::from_label("Dificultad")
                .width(content_width * 0.7)
                .selected_text(app.difficulty.label())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(&mut app.difficulty, difficulty, difficulty.label());
                    }
                });
            ui.add_space(20.0);

            let btn_w = (content_width * 0.9).clamp(120.0, 360.0);
            let start = ui.add_sized([btn_w, 40.0], Button::new("▶ Empezar quiz"));
            ui.add_space(5.0);
            let exit = ui.add_sized([btn_w, 40.0], Button::new("🔙 Salir"));

            if start.clicked() {
                app.start_fetch();
            }
            if exit.clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            // Error de la última descarga, si lo hubo
            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new(&app.message).color(Color32::LIGHT_RED));
            }
        });
    });
}
