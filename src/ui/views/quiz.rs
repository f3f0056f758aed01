use egui::{Button, CentralPanel, Context, ProgressBar, ScrollArea};

use crate::QuizApp;
use crate::app::QUESTION_SECONDS;
use crate::model::AppState;
use crate::ui::helpers::{option_button, timer_circle};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Sin sesión no hay nada que pintar; de vuelta al formulario.
    let Some(view) = app.question_view() else {
        app.state = AppState::Settings;
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 420.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);

                    // Cabecera: categoría a la izquierda, puntuación a la derecha
                    ui.horizontal(|ui| {
                        ui.label(format!("Categoría: {}", view.category));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(format!("Puntuación: {}", view.score));
                            },
                        );
                    });
                    ui.add_space(4.0);
                    ui.add(ProgressBar::new(view.progress / 100.0).desired_height(6.0));
                    ui.add_space(10.0);

                    timer_circle(ui, app.time_left, QUESTION_SECONDS);
                    ui.add_space(10.0);

                    ui.heading(format!("P{}. {}", view.number, view.prompt));
                    ui.label(format!("Pregunta {} de {}", view.number, view.total));
                    ui.add_space(12.0);

                    let option_width = panel_width * 0.85;
                    ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                        for (idx, row) in view.options.iter().enumerate() {
                            if option_button(ui, row, option_width) {
                                app.procesar_respuesta(idx);
                            }
                            ui.add_space(6.0);
                        }
                    });

                    ui.add_space(12.0);

                    // "Siguiente" sólo tras responder o agotarse el tiempo
                    let next_label = if view.is_last {
                        "Ver resultado"
                    } else {
                        "Siguiente pregunta"
                    };
                    ui.horizontal(|ui| {
                        ui.add_space((ui.available_width() - option_width) / 2.0);
                        let btn_w = (option_width - 8.0) / 2.0;
                        let next = ui.add_enabled(
                            view.answered,
                            Button::new(next_label).min_size([btn_w, 36.0].into()),
                        );
                        let quit = ui
                            .add_sized([btn_w, 36.0], Button::new("Abandonar"));

                        if next.clicked() {
                            app.avanzar_a_siguiente_pregunta();
                        }
                        if quit.clicked() {
                            app.confirm_quit = true;
                        }
                    });
                });
            });

        ui.add_space(extra_space);
    });
}
