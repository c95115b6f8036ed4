// Ficheiro: src/core/game_node.rs
// Descrição: Nó da árvore de jogo sobre o tabuleiro de referência.

use super::board::Board;
use super::types::{Color, Move};
use crate::search::{GameTreeNode, NodeType};

/// Nó da árvore de busca: uma posição, o lado maximizador e a utilidade calculada.
/// Os filhos são criados a pedido e pertencem a quem os pediu.
#[derive(Debug, Clone)]
pub struct ChessNode {
    board: Board,
    max_player: Color,
    node_type: NodeType,
    mv: Option<Move>,
    utility: f64,
}

impl ChessNode {
    /// Raiz da busca para `max_player`; é MAX quando é ele a jogar.
    pub fn root(board: Board, max_player: Color) -> Self {
        let node_type = if board.to_move == max_player { NodeType::Max } else { NodeType::Min };
        ChessNode { board, max_player, node_type, mv: None, utility: 0.0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn max_player(&self) -> Color {
        self.max_player
    }

    pub fn min_player(&self) -> Color {
        !self.max_player
    }
}

impl GameTreeNode for ChessNode {
    type Move = Move;

    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn is_terminal(&self) -> bool {
        self.board.is_game_over()
    }

    fn children(&self) -> Vec<Self> {
        if !self.board.has_king(Color::White) || !self.board.has_king(Color::Black) {
            return Vec::new();
        }

        self.board
            .generate_all_moves()
            .into_iter()
            .map(|mv| {
                let mut board = self.board;
                board.make_move(mv);
                ChessNode {
                    board,
                    max_player: self.max_player,
                    node_type: self.node_type.opposite(),
                    mv: Some(mv),
                    utility: 0.0,
                }
            })
            .collect()
    }

    fn get_move(&self) -> Option<&Move> {
        self.mv.as_ref()
    }

    fn utility_value(&self) -> f64 {
        self.utility
    }

    fn set_utility_value(&mut self, value: f64) {
        self.utility = value;
    }
}
