// Ficheiro: src/engine/agent.rs
// Descrição: Agente alfa-beta: constrói a raiz, lança a busca com o tempo restante e desconta o relógio.

use super::clock::GameClock;
use super::config::SearchConfig;
use crate::core::{Board, ChessNode, Color, Move};
use crate::error::{ConfigError, SearchError};
use crate::search::{duration_ms, run_with_deadline, ChessHeuristic, CrossValidator, SearchOutcome, SearchTask};
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct AlphaBetaAgent {
    color: Color,
    config: SearchConfig,
    heuristic: ChessHeuristic,
    validator: Option<CrossValidator>,
}

impl AlphaBetaAgent {
    pub fn new(color: Color, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let validator = config.cross_check.then(CrossValidator::new);
        Ok(AlphaBetaAgent { color, config, heuristic: ChessHeuristic, validator })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Contadores da busca sombra, quando ativa.
    pub fn cross_validator(&self) -> Option<&CrossValidator> {
        self.validator.as_ref()
    }

    /// Escolhe um lance com o tempo que resta no relógio.
    ///
    /// `Ok(None)` quando o prazo expira (o orçamento inteiro é cobrado) ou quando
    /// a posição já é terminal. Um erro é fatal para a partida.
    pub fn choose_move(&mut self, board: &Board, clock: &mut GameClock) -> Result<Option<Move>, SearchError> {
        let depth = self.config.max_depth;
        let root = ChessNode::root(*board, self.color);

        // A busca sombra corre com o mesmo prazo e o tempo que gasta é cobrado
        if let Some(validator) = self.validator.as_mut() {
            let budget_ms = clock.time_left(self.color);
            let started = Instant::now();
            validator.check_with_deadline(&root, depth, self.heuristic, Duration::from_millis(budget_ms))?;
            clock.charge(self.color, duration_ms(started.elapsed()).min(budget_ms));
        }

        let budget_ms = clock.time_left(self.color);
        let task = SearchTask::new(root, depth);
        let outcome = run_with_deadline(task, self.heuristic, Duration::from_millis(budget_ms))?;
        clock.charge(self.color, outcome.charged_ms());

        match outcome {
            SearchOutcome::Completed(result) => {
                let elapsed_ms = result.elapsed_ms();
                let mv = result.into_move();
                match &mv {
                    Some(mv) => info!(color = %self.color, %mv, elapsed_ms, "lance escolhido"),
                    None => info!(color = %self.color, elapsed_ms, "posição terminal, sem lance"),
                }
                Ok(mv)
            }
            SearchOutcome::TimedOut { charged_ms } => {
                warn!(color = %self.color, charged_ms, "sem lance neste ciclo");
                Ok(None)
            }
        }
    }
}
