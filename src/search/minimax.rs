// Ficheiro: src/search/minimax.rs
// Descrição: Minimax exaustivo, sem poda. Serve de referência para validar a busca alfa-beta.

use super::alpha_beta::SearchStats;
use super::evaluation::Heuristic;
use super::move_ordering::order_children;
use super::node::{GameTreeNode, NodeType};
use super::search_thread::SearchController;
use std::sync::Arc;

/// Mesmo caso base, mesma ordenação e mesmo desempate que o alfa-beta, mas visita a árvore toda.
pub struct MinimaxSearcher<H> {
    heuristic: H,
    controller: Option<Arc<SearchController>>,
    stats: SearchStats,
}

impl<H> MinimaxSearcher<H> {
    pub fn new(heuristic: H) -> Self {
        MinimaxSearcher { heuristic, controller: None, stats: SearchStats::default() }
    }

    pub fn with_controller(mut self, controller: Arc<SearchController>) -> Self {
        self.controller = Some(controller);
        self
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.controller.as_ref().is_some_and(|c| c.is_stopped())
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn search<N>(&mut self, mut node: N, depth: u8) -> N
    where
        N: GameTreeNode,
        H: Heuristic<N>,
    {
        self.stats = SearchStats::default();
        match self.visit(&mut node, depth) {
            Some(best_child) => best_child,
            None => node,
        }
    }

    fn visit<N>(&mut self, node: &mut N, depth: u8) -> Option<N>
    where
        N: GameTreeNode,
        H: Heuristic<N>,
    {
        self.stats.nodes += 1;

        if depth == 0 || node.is_terminal() {
            let value = self.heuristic.evaluate(node);
            self.stats.evaluations += 1;
            node.set_utility_value(value);
            return None;
        }

        let maximizing = node.node_type() == NodeType::Max;
        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut winner: Option<N> = None;

        for mut child in order_children(node.children()) {
            if self.should_stop() {
                break;
            }

            let value = match self.visit(&mut child, depth - 1) {
                Some(grandchild) => grandchild.utility_value(),
                None => child.utility_value(),
            };

            let improves = if maximizing { value > best } else { value < best };
            if improves {
                best = value;
                winner = Some(child);
            }
        }

        if let Some(child) = winner.as_mut() {
            child.set_utility_value(best);
        }
        winner
    }
}
