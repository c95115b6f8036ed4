// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::{Board, Color, Move, Piece, PieceKind, Square};

/// Deslocamentos (coluna, linha) possíveis do cavalo.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// Gera todos os lances pseudo-legais para o cavalo em `from`.
pub fn generate_knight_moves(board: &Board, from: Square, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(8); // Pre-aloca para reduzir realocações
    let piece = Piece::new(PieceKind::Knight, color);
    for &(df, dr) in KNIGHT_OFFSETS.iter() {
        super::push_step(board, from, from.offset(df, dr), piece, &mut moves);
    }
    moves
}
