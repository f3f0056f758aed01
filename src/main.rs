use eframe::egui;
use trivia_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Trivia Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
