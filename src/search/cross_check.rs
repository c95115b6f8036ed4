// Ficheiro: src/search/cross_check.rs
// Descrição: Busca sombra: corre minimax e alfa-beta em paralelo sobre cópias da raiz e compara.

use super::alpha_beta::AlphaBetaSearcher;
use super::evaluation::Heuristic;
use super::minimax::MinimaxSearcher;
use super::node::GameTreeNode;
use super::search_thread::{duration_ms, run_worker, Deadline, SearchController};
use crate::error::SearchError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Diferença máxima aceite entre as utilidades das duas buscas
pub const UTILITY_TOLERANCE: f64 = 1e-12;

/// Lances e utilidades de raiz devolvidos pelas duas buscas
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCheckReport<M> {
    pub minimax_move: Option<M>,
    pub minimax_utility: f64,
    pub alpha_beta_move: Option<M>,
    pub alpha_beta_utility: f64,
}

impl<M: PartialEq> CrossCheckReport<M> {
    pub fn utilities_agree(&self) -> bool {
        (self.minimax_utility - self.alpha_beta_utility).abs() <= UTILITY_TOLERANCE
    }

    pub fn moves_agree(&self) -> bool {
        self.minimax_move == self.alpha_beta_move
    }

    pub fn is_consistent(&self) -> bool {
        self.moves_agree() && self.utilities_agree()
    }
}

/// Conta verificações, discrepâncias e verificações abandonadas ao longo de uma partida
#[derive(Debug, Default)]
pub struct CrossValidator {
    moves_checked: u64,
    mismatches: u64,
    skipped: u64,
}

impl CrossValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves_checked(&self) -> u64 {
        self.moves_checked
    }

    pub fn mismatches(&self) -> u64 {
        self.mismatches
    }

    /// Verificações que não terminaram dentro do prazo
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Compara as duas buscas sem limite de tempo.
    pub fn check<N, H>(&mut self, root: &N, depth: u8, heuristic: &H) -> CrossCheckReport<N::Move>
    where
        N: GameTreeNode + Clone + Send,
        N::Move: Clone + PartialEq + Send,
        H: Heuristic<N> + Sync,
    {
        let report = run_pair(root, depth, heuristic, None);
        self.tally(&report, depth);
        report
    }

    /// Como `check`, mas numa thread própria e com prazo. Ao expirar, as duas
    /// buscas são mandadas parar e devolve `Ok(None)`: não há verificação neste ciclo.
    pub fn check_with_deadline<N, H>(
        &mut self,
        root: &N,
        depth: u8,
        heuristic: H,
        deadline: Duration,
    ) -> Result<Option<CrossCheckReport<N::Move>>, SearchError>
    where
        N: GameTreeNode + Clone + Send + 'static,
        N::Move: Clone + PartialEq + Send + 'static,
        H: Heuristic<N> + Send + Sync + 'static,
    {
        let root = root.clone();
        let outcome = run_worker("alfabeta-cross-check", deadline, move |controller| {
            run_pair(&root, depth, &heuristic, Some(controller))
        })?;

        match outcome {
            Deadline::Finished { value: report, elapsed_ms } => {
                debug!(elapsed_ms, "busca sombra terminada");
                self.tally(&report, depth);
                Ok(Some(report))
            }
            Deadline::Expired => {
                self.skipped += 1;
                warn!(depth, deadline_ms = duration_ms(deadline), "busca sombra sem tempo, verificação ignorada");
                Ok(None)
            }
        }
    }

    fn tally<M: PartialEq>(&mut self, report: &CrossCheckReport<M>, depth: u8) {
        self.moves_checked += 1;
        if report.is_consistent() {
            debug!(depth, utility = report.alpha_beta_utility, "busca sombra confirma o alfa-beta");
        } else {
            self.mismatches += 1;
            warn!(
                depth,
                minimax_utility = report.minimax_utility,
                alpha_beta_utility = report.alpha_beta_utility,
                moves_agree = report.moves_agree(),
                "busca sombra discorda do alfa-beta"
            );
        }
    }
}

/// Cada busca recebe a sua própria cópia da raiz: nenhuma utilidade é escrita em nós partilhados.
fn run_pair<N, H>(
    root: &N,
    depth: u8,
    heuristic: &H,
    controller: Option<Arc<SearchController>>,
) -> CrossCheckReport<N::Move>
where
    N: GameTreeNode + Clone + Send,
    N::Move: Clone + Send,
    H: Heuristic<N> + Sync,
{
    let minimax_root = root.clone();
    let alpha_beta_root = root.clone();
    let minimax_controller = controller.clone();

    let ((minimax_move, minimax_utility), (alpha_beta_move, alpha_beta_utility)) = rayon::join(
        move || {
            let mut searcher = MinimaxSearcher::new(heuristic);
            if let Some(controller) = minimax_controller {
                searcher = searcher.with_controller(controller);
            }
            let best = searcher.search(minimax_root, depth);
            (best.get_move().cloned(), best.utility_value())
        },
        move || {
            let mut searcher = AlphaBetaSearcher::new(heuristic);
            if let Some(controller) = controller {
                searcher = searcher.with_controller(controller);
            }
            let best = searcher.search_root(alpha_beta_root, depth);
            (best.get_move().cloned(), best.utility_value())
        },
    );

    CrossCheckReport { minimax_move, minimax_utility, alpha_beta_move, alpha_beta_utility }
}
