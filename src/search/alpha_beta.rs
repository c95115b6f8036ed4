// Ficheiro: src/search/alpha_beta.rs
// Descrição: Busca minimax com poda alfa-beta (fail-soft) sobre um GameTreeNode genérico.

use super::evaluation::Heuristic;
use super::move_ordering::order_children;
use super::node::{GameTreeNode, NodeType};
use super::search_thread::SearchController;
use std::sync::Arc;
use tracing::debug;

/// Contadores de uma busca
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
}

/// Motor alfa-beta. A heurística é chamada nas folhas (profundidade zero ou nó terminal).
pub struct AlphaBetaSearcher<H> {
    heuristic: H,
    controller: Option<Arc<SearchController>>,
    stats: SearchStats,
}

impl<H> AlphaBetaSearcher<H> {
    pub fn new(heuristic: H) -> Self {
        AlphaBetaSearcher { heuristic, controller: None, stats: SearchStats::default() }
    }

    /// Liga a busca a uma flag de paragem, consultada entre filhos.
    pub fn with_controller(mut self, controller: Arc<SearchController>) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.controller.as_ref().is_some_and(|c| c.is_stopped())
    }

    /// Busca a partir da raiz com a janela completa (-inf, +inf).
    pub fn search_root<N>(&mut self, root: N, depth: u8) -> N
    where
        N: GameTreeNode,
        H: Heuristic<N>,
    {
        self.stats = SearchStats::default();
        let best = self.search(root, depth, f64::NEG_INFINITY, f64::INFINITY);
        debug!(
            depth,
            nodes = self.stats.nodes,
            evaluations = self.stats.evaluations,
            cutoffs = self.stats.cutoffs,
            utility = best.utility_value(),
            "busca alfa-beta concluída"
        );
        best
    }

    /// Devolve o melhor filho de `node` com a utilidade atribuída, ou o próprio
    /// `node` quando não houve expansão.
    pub fn search<N>(&mut self, mut node: N, depth: u8, alpha: f64, beta: f64) -> N
    where
        N: GameTreeNode,
        H: Heuristic<N>,
    {
        match self.visit(&mut node, depth, alpha, beta) {
            Some(best_child) => best_child,
            None => node,
        }
    }

    /// Avalia ou expande `node`. Só devolve um filho quando houve expansão com vencedor.
    fn visit<N>(&mut self, node: &mut N, depth: u8, mut alpha: f64, mut beta: f64) -> Option<N>
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

            let value = match self.visit(&mut child, depth - 1, alpha, beta) {
                Some(grandchild) => grandchild.utility_value(),
                None => child.utility_value(),
            };

            // Comparação estrita: em caso de empate fica o primeiro
            if maximizing {
                if value > best {
                    best = value;
                    winner = Some(child);
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    winner = Some(child);
                }
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if let Some(child) = winner.as_mut() {
            child.set_utility_value(best);
        }
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_tree::{RecordingHeuristic, TestNode};

    #[test]
    fn test_picks_best_of_two_terminals() {
        let root = TestNode::max("root", 0.0, vec![TestNode::leaf("A", 5.0), TestNode::leaf("B", 3.0)]).as_root();
        let mut searcher = AlphaBetaSearcher::new(RecordingHeuristic::default());

        let best = searcher.search_root(root, 1);

        assert_eq!(best.label, "A");
        assert_eq!(best.utility_value(), 5.0);
        assert_eq!(best.get_move().map(|mv| mv.label.as_str()), Some("A"));
    }

    #[test]
    fn test_min_node_picks_lowest() {
        let root = TestNode::min("root", 0.0, vec![TestNode::leaf("A", 5.0), TestNode::leaf("B", 3.0)]).as_root();
        let best = AlphaBetaSearcher::new(RecordingHeuristic::default()).search_root(root, 1);
        assert_eq!(best.label, "B");
        assert_eq!(best.utility_value(), 3.0);
    }

    #[test]
    fn test_ties_keep_first_child() {
        let root = TestNode::max(
            "root",
            0.0,
            vec![TestNode::leaf("first", 7.0), TestNode::leaf("second", 7.0), TestNode::leaf("third", 3.0)],
        );
        let best = AlphaBetaSearcher::new(RecordingHeuristic::default()).search_root(root, 1);
        assert_eq!(best.label, "first");

        let root = TestNode::min("root", 0.0, vec![TestNode::leaf("x", 2.0), TestNode::leaf("y", 2.0)]);
        let best = AlphaBetaSearcher::new(RecordingHeuristic::default()).search_root(root, 1);
        assert_eq!(best.label, "x");
    }

    #[test]
    fn test_ties_follow_move_order_not_input_order() {
        use crate::search::node::MoveKind;
        // A captura é visitada primeiro e ganha o empate
        let root = TestNode::max(
            "root",
            0.0,
            vec![TestNode::leaf("quiet", 4.0), TestNode::leaf("capture", 4.0).with_kind(MoveKind::Capture)],
        );
        let best = AlphaBetaSearcher::new(RecordingHeuristic::default()).search_root(root, 1);
        assert_eq!(best.label, "capture");
    }

    #[test]
    fn test_depth_zero_returns_node_itself() {
        let root = TestNode::max("root", 42.0, vec![TestNode::leaf("A", 5.0)]);
        let heuristic = RecordingHeuristic::default();
        let mut searcher = AlphaBetaSearcher::new(heuristic.clone());

        let result = searcher.search(root.clone(), 0, f64::NEG_INFINITY, f64::INFINITY);

        assert_eq!(result.label, "root");
        assert_eq!(result.utility_value(), 42.0);
        assert_eq!(root.expansions(), 0);
        assert_eq!(heuristic.visited(), vec!["root"]);
    }

    #[test]
    fn test_terminal_root_is_not_expanded() {
        let root = TestNode::terminal_with_children(
            "root",
            -1.0,
            vec![TestNode::leaf("A", 100.0), TestNode::leaf("B", 200.0)],
        )
        .as_root();
        let heuristic = RecordingHeuristic::default();
        let mut searcher = AlphaBetaSearcher::new(heuristic.clone());

        let result = searcher.search_root(root.clone(), 3);

        assert_eq!(result.label, "root");
        assert!(result.get_move().is_none());
        assert_eq!(result.utility_value(), -1.0);
        assert_eq!(root.expansions(), 0);
        assert_eq!(heuristic.visited(), vec!["root"]);
    }

    #[test]
    fn test_childless_node_keeps_its_utility() {
        let lonely = TestNode::max("lonely", 4.0, Vec::new()).with_utility(1.5);
        let heuristic = RecordingHeuristic::default();

        let result = AlphaBetaSearcher::new(heuristic.clone()).search_root(lonely, 2);

        assert_eq!(result.label, "lonely");
        assert_eq!(result.utility_value(), 1.5);
        assert!(heuristic.visited().is_empty());
    }

    #[test]
    fn test_cutoff_skips_remaining_children() {
        // Depois do primeiro filho alpha = beta = 10: os outros nunca são vistos
        let root = TestNode::max(
            "root",
            0.0,
            vec![TestNode::leaf("first", 10.0), TestNode::leaf("second", 50.0), TestNode::leaf("third", 99.0)],
        );
        let heuristic = RecordingHeuristic::default();
        let mut searcher = AlphaBetaSearcher::new(heuristic.clone());

        let best = searcher.search(root, 1, f64::NEG_INFINITY, 10.0);

        assert_eq!(best.label, "first");
        assert_eq!(best.utility_value(), 10.0);
        assert_eq!(heuristic.visited(), vec!["first"]);
        assert_eq!(searcher.stats().cutoffs, 1);
    }

    #[test]
    fn test_cutoff_inside_min_subtree() {
        let root = TestNode::max(
            "root",
            0.0,
            vec![
                TestNode::min("A", 0.0, vec![TestNode::leaf("a1", 5.0), TestNode::leaf("a2", 7.0)]),
                TestNode::min(
                    "B",
                    0.0,
                    vec![TestNode::leaf("b1", 3.0), TestNode::leaf("b2", 99.0), TestNode::leaf("b3", 100.0)],
                ),
            ],
        )
        .as_root();
        let heuristic = RecordingHeuristic::default();
        let mut searcher = AlphaBetaSearcher::new(heuristic.clone());

        let best = searcher.search_root(root, 2);

        assert_eq!(best.label, "A");
        assert_eq!(best.utility_value(), 5.0);
        assert_eq!(heuristic.visited(), vec!["a1", "a2", "b1"]);

        let stats = searcher.stats();
        assert_eq!(stats.evaluations, 3);
        assert_eq!(stats.cutoffs, 1);
        // raiz, A, a1, a2, B, b1
        assert_eq!(stats.nodes, 6);
    }

    #[test]
    fn test_stopped_controller_halts_expansion() {
        let controller = Arc::new(SearchController::new());
        controller.stop();
        let root = TestNode::max("root", 0.0, vec![TestNode::leaf("A", 5.0), TestNode::leaf("B", 3.0)]);
        let heuristic = RecordingHeuristic::default();

        let result = AlphaBetaSearcher::new(heuristic.clone()).with_controller(controller).search_root(root, 1);

        assert_eq!(result.label, "root");
        assert!(heuristic.visited().is_empty());
    }
}
