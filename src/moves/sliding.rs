// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Torres, Bispos e Damas).

use crate::core::{Board, Move, Piece, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1), (1, 0), (0, -1), (-1, 0),
    (1, 1), (1, -1), (-1, -1), (-1, 1),
];

/// Função genérica para gerar lances de peças deslizantes a partir de `from`.
/// Cada raio pára na primeira peça: captura se for inimiga.
pub fn generate_sliding_moves(board: &Board, from: Square, piece: Piece, directions: &[(i8, i8)]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);

    for &(df, dr) in directions {
        let mut to = from.offset(df, dr);
        while to.is_inbounds() {
            match board.piece_at(to) {
                None => {
                    moves.push(Move { from, to, piece: piece.kind, captured: None, promotion: None });
                }
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(Move { from, to, piece: piece.kind, captured: Some(target.kind), promotion: None });
                    }
                    break;
                }
            }
            to = to.offset(df, dr);
        }
    }
    moves
}
