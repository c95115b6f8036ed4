// Ficheiro: src/engine/clock.rs
// Descrição: Relógio de partida com o tempo restante de cada lado.

use crate::core::Color;
use crate::search::duration_ms;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    white_ms: u64,
    black_ms: u64,
}

impl GameClock {
    /// Os dois lados começam com o mesmo orçamento.
    pub fn new(budget: Duration) -> Self {
        let ms = duration_ms(budget);
        GameClock { white_ms: ms, black_ms: ms }
    }

    pub fn time_left(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white_ms,
            Color::Black => self.black_ms,
        }
    }

    /// Desconta tempo gasto; nunca fica negativo.
    pub fn charge(&mut self, color: Color, ms: u64) {
        let left = match color {
            Color::White => &mut self.white_ms,
            Color::Black => &mut self.black_ms,
        };
        *left = left.saturating_sub(ms);
    }

    pub fn is_flagged(&self, color: Color) -> bool {
        self.time_left(color) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_is_per_side_and_saturating() {
        let mut clock = GameClock::new(Duration::from_millis(1_000));
        clock.charge(Color::White, 300);
        assert_eq!(clock.time_left(Color::White), 700);
        assert_eq!(clock.time_left(Color::Black), 1_000);

        clock.charge(Color::White, 5_000);
        assert_eq!(clock.time_left(Color::White), 0);
        assert!(clock.is_flagged(Color::White));
        assert!(!clock.is_flagged(Color::Black));
    }

    #[test]
    fn test_huge_budget_saturates() {
        let clock = GameClock::new(Duration::MAX);
        assert_eq!(clock.time_left(Color::White), u64::MAX);
        assert_eq!(clock.time_left(Color::Black), u64::MAX);
    }
}
