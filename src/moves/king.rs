// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei.

use crate::core::{Board, Color, Move, Piece, PieceKind, Square};

/// Gera todos os lances pseudo-legais para o rei em `from`.
/// Não há roque neste modelo.
pub fn generate_king_moves(board: &Board, from: Square, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(8); // Pre-aloca para reduzir realocações
    let piece = Piece::new(PieceKind::King, color);
    for to in from.neighbors() {
        super::push_step(board, from, to, piece, &mut moves);
    }
    moves
}
