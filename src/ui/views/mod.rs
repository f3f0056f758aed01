pub mod loading;
pub mod quiz;
pub mod settings;
pub mod summary;
