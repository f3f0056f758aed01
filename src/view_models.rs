/// Estado visual de cada opción de respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Todavía se puede pulsar.
    Selectable,
    /// Revelada como correcta (verde).
    Correct,
    /// La que eligió el usuario y era incorrecta (rojo).
    Wrong,
    /// Bloqueada tras responder o agotar el tiempo.
    Disabled,
}

#[derive(Clone, Debug)]
pub struct OptionRow {
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

/// Todo lo que la vista del quiz necesita pintar, ya calculado.
#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize, // 1-based, para "P3."
    pub total: usize,
    pub category: String,
    pub prompt: String,
    pub score: u32,
    pub progress: f32,
    pub answered: bool,
    pub is_last: bool,
    pub options: Vec<OptionRow>,
}
