// Ficheiro: src/engine/config.rs
// Descrição: Parâmetros de um agente: profundidade, tempo total e busca sombra.

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: u8 = 3;
pub const DEFAULT_MAX_PLAYTIME: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Profundidade fixa de cada busca, em meios-lances
    pub max_depth: u8,
    /// Tempo total de jogo de cada lado
    pub max_playtime: Duration,
    /// Corre também o minimax exaustivo e compara os resultados
    pub cross_check: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { max_depth: DEFAULT_MAX_DEPTH, max_playtime: DEFAULT_MAX_PLAYTIME, cross_check: false }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_playtime(mut self, playtime: Duration) -> Self {
        self.max_playtime = playtime;
        self
    }

    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_playtime.is_zero() {
            return Err(ConfigError::ZeroPlaytime);
        }
        Ok(())
    }
}
