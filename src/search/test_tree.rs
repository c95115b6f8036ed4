// Árvores explícitas para os testes da busca.

use super::{GameTreeNode, Heuristic, MoveKind, NodeType, SearchMove};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct TestMove {
    pub label: String,
    pub kind: MoveKind,
}

impl SearchMove for TestMove {
    fn kind(&self) -> MoveKind {
        self.kind
    }
}

/// Nó com valor estático, filhos fixos e um contador partilhado de expansões.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub label: String,
    node_type: NodeType,
    mv: Option<TestMove>,
    static_value: f64,
    terminal: bool,
    children: Vec<TestNode>,
    utility: f64,
    expansions: Arc<AtomicUsize>,
}

impl TestNode {
    fn new(label: &str, node_type: NodeType, static_value: f64, terminal: bool, children: Vec<TestNode>) -> Self {
        let mut node = TestNode {
            label: label.to_string(),
            node_type,
            mv: Some(TestMove { label: label.to_string(), kind: MoveKind::Quiet }),
            static_value,
            terminal,
            children,
            utility: 0.0,
            expansions: Arc::new(AtomicUsize::new(0)),
        };
        let counter = node.expansions.clone();
        node.share_counter(counter);
        node
    }

    /// Folha terminal; o tipo é irrelevante para a busca.
    pub fn leaf(label: &str, value: f64) -> Self {
        TestNode::new(label, NodeType::Min, value, true, Vec::new())
    }

    pub fn max(label: &str, value: f64, children: Vec<TestNode>) -> Self {
        TestNode::new(label, NodeType::Max, value, false, children)
    }

    pub fn min(label: &str, value: f64, children: Vec<TestNode>) -> Self {
        TestNode::new(label, NodeType::Min, value, false, children)
    }

    /// Nó terminal que mesmo assim tem filhos, para provar que não são expandidos.
    pub fn terminal_with_children(label: &str, value: f64, children: Vec<TestNode>) -> Self {
        TestNode::new(label, NodeType::Max, value, true, children)
    }

    pub fn with_kind(mut self, kind: MoveKind) -> Self {
        if let Some(mv) = self.mv.as_mut() {
            mv.kind = kind;
        }
        self
    }

    /// Remove o lance produtor, como numa raiz.
    pub fn as_root(mut self) -> Self {
        self.mv = None;
        self
    }

    pub fn with_utility(mut self, utility: f64) -> Self {
        self.utility = utility;
        self
    }

    pub fn static_value(&self) -> f64 {
        self.static_value
    }

    /// Quantas vezes `children()` foi chamado em toda a árvore.
    pub fn expansions(&self) -> usize {
        self.expansions.load(Ordering::SeqCst)
    }

    fn share_counter(&mut self, counter: Arc<AtomicUsize>) {
        self.expansions = counter.clone();
        for child in &mut self.children {
            child.share_counter(counter.clone());
        }
    }
}

impl GameTreeNode for TestNode {
    type Move = TestMove;

    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn children(&self) -> Vec<Self> {
        self.expansions.fetch_add(1, Ordering::SeqCst);
        self.children.clone()
    }

    fn get_move(&self) -> Option<&TestMove> {
        self.mv.as_ref()
    }

    fn utility_value(&self) -> f64 {
        self.utility
    }

    fn set_utility_value(&mut self, value: f64) {
        self.utility = value;
    }
}

/// Devolve o valor estático do nó e regista a etiqueta de cada avaliação.
#[derive(Debug, Clone, Default)]
pub struct RecordingHeuristic {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingHeuristic {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Heuristic<TestNode> for RecordingHeuristic {
    fn evaluate(&self, node: &TestNode) -> f64 {
        self.visited.lock().unwrap_or_else(|e| e.into_inner()).push(node.label.clone());
        node.static_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_recording_survives_poisoned_lock() {
        let heuristic = RecordingHeuristic::default();
        let visited = Arc::clone(&heuristic.visited);
        let _ = thread::spawn(move || {
            let _guard = visited.lock();
            panic!("poison the lock");
        })
        .join();

        heuristic.evaluate(&TestNode::leaf("A", 1.0));
        assert_eq!(heuristic.visited(), vec!["A"]);
    }
}
