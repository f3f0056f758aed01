use std::time::{Duration, Instant};

use super::*;

/// Segundos por pregunta.
pub const QUESTION_SECONDS: u32 = 15;

impl QuizApp {
    /// Reinicia la cuenta atrás a 15 s. Todo camino que arranca el
    /// temporizador pasa por aquí, así que nunca hay dos cuentas vivas.
    pub fn start_timer(&mut self) {
        self.time_left = QUESTION_SECONDS;
        self.timer_paused = false;
        self.last_tick = Some(Instant::now());
    }

    /// Pausa por flag, igual que el original: el tick sigue llegando pero
    /// no descuenta.
    pub fn pause_timer(&mut self) {
        self.timer_paused = true;
    }

    /// Llamado en cada frame mientras hay pregunta en pantalla. Descuenta
    /// segundos enteros y dispara el timeout al llegar a 0.
    pub fn tick_timer(&mut self) {
        if self.timer_paused || self.time_left == 0 {
            return;
        }
        let Some(last) = self.last_tick else {
            return;
        };

        let elapsed = last.elapsed();
        if elapsed < Duration::from_secs(1) {
            return;
        }

        self.time_left = self.time_left.saturating_sub(elapsed.as_secs() as u32);
        self.last_tick = Some(Instant::now());

        if self.time_left == 0 {
            self.handle_timeout();
        }
    }
}
