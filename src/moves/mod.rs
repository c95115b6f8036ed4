// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça.
// Os lances são pseudo-legais: não se verifica xeque, o rei pode ser capturado.

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod king;

use crate::core::{Board, Move, Piece, PieceKind, Square};

/// Gera os lances pseudo-legais da peça `piece` que está em `from`.
pub fn generate_piece_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece.color),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece.color),
        PieceKind::Bishop => sliding::generate_sliding_moves(board, from, piece, &sliding::BISHOP_DIRECTIONS),
        PieceKind::Rook => sliding::generate_sliding_moves(board, from, piece, &sliding::ROOK_DIRECTIONS),
        PieceKind::Queen => sliding::generate_sliding_moves(board, from, piece, &sliding::QUEEN_DIRECTIONS),
        PieceKind::King => king::generate_king_moves(board, from, piece.color),
    }
}

/// Tenta um lance de salto (cavalo/rei) para `to`: vazio ou captura inimiga.
#[inline]
fn push_step(board: &Board, from: Square, to: Square, piece: Piece, moves: &mut Vec<Move>) {
    if !to.is_inbounds() {
        return;
    }
    match board.piece_at(to) {
        None => moves.push(Move { from, to, piece: piece.kind, captured: None, promotion: None }),
        Some(target) if target.color != piece.color => {
            moves.push(Move { from, to, piece: piece.kind, captured: Some(target.kind), promotion: None })
        }
        Some(_) => {}
    }
}
