use egui::{Align2, Button, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::view_models::{OptionRow, OptionState};

/// Botón de opción de respuesta. Sólo es pulsable mientras la pregunta no
/// está respondida; después queda coloreado según el revelado.
/// Devuelve si se ha pulsado.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32) -> bool {
    let label = format!("{})  {}", row.letter, row.text);
    let mut button = Button::new(RichText::new(label).size(15.0));

    match row.state {
        OptionState::Correct => {
            button = Button::new(
                RichText::new(format!("{})  {}  ✔", row.letter, row.text))
                    .size(15.0)
                    .color(Color32::WHITE),
            )
            .fill(Color32::from_rgb(0x2e, 0x7d, 0x32));
        }
        OptionState::Wrong => {
            button = Button::new(
                RichText::new(format!("{})  {}  ✘", row.letter, row.text))
                    .size(15.0)
                    .color(Color32::WHITE),
            )
            .fill(Color32::from_rgb(0xc6, 0x28, 0x28));
        }
        OptionState::Selectable | OptionState::Disabled => {}
    }

    let enabled = row.state == OptionState::Selectable;
    ui.add_enabled(enabled, button.min_size(Vec2::new(width, 40.0)))
        .clicked()
}

/// Círculo de cuenta atrás: un arco proporcional al tiempo restante con el
/// número de segundos en el centro. Equivale al stroke-dashoffset del
/// original, pintado a mano.
pub fn timer_circle(ui: &mut Ui, time_left: u32, total_seconds: u32) {
    let size = Vec2::splat(64.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = 26.0;

    painter.circle_stroke(center, radius, Stroke::new(4.0, ui.visuals().faint_bg_color));

    let fraction = if total_seconds == 0 {
        0.0
    } else {
        time_left as f32 / total_seconds as f32
    };
    if fraction > 0.0 {
        let color = if time_left <= 5 {
            Color32::from_rgb(0xc6, 0x28, 0x28)
        } else {
            Color32::from_rgb(0x2e, 0x7d, 0x32)
        };
        // Arco desde las 12 en punto, en sentido horario
        let steps = 48;
        let start = -std::f32::consts::FRAC_PI_2;
        let sweep = std::f32::consts::TAU * fraction;
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let angle = start + sweep * i as f32 / steps as f32;
                Pos2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(4.0, color)));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        time_left.to_string(),
        FontId::proportional(18.0),
        ui.visuals().text_color(),
    );
}
