pub mod api;
pub mod app;
pub mod model;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
