// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões.

use crate::core::{Board, Color, Move, PieceKind, Square};

/// Peças possíveis numa promoção, da mais forte para a mais fraca.
const PROMOTION_PIECES: [PieceKind; 4] = [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

/// Direção de avanço, fila inicial e fila de promoção de cada cor.
#[inline]
fn pawn_geometry(color: Color) -> (i8, i8, i8) {
    match color {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    }
}

/// Adiciona o lance, expandindo-o nas quatro promoções quando chega à última fila.
fn push_pawn_move(from: Square, to: Square, captured: Option<PieceKind>, promotion_rank: i8, moves: &mut Vec<Move>) {
    if to.rank == promotion_rank {
        for piece in PROMOTION_PIECES {
            moves.push(Move { from, to, piece: PieceKind::Pawn, captured, promotion: Some(piece) });
        }
    } else {
        moves.push(Move { from, to, piece: PieceKind::Pawn, captured, promotion: None });
    }
}

/// Gera todos os lances pseudo-legais para o peão em `from`.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);
    let (forward, start_rank, promotion_rank) = pawn_geometry(color);

    // Avanço simples
    let single = from.offset(0, forward);
    if single.is_inbounds() && !board.is_occupied(single) {
        push_pawn_move(from, single, None, promotion_rank, &mut moves);

        // Avanço duplo
        let double = single.offset(0, forward);
        if from.rank == start_rank && double.is_inbounds() && !board.is_occupied(double) {
            moves.push(Move { from, to: double, piece: PieceKind::Pawn, captured: None, promotion: None });
        }
    }

    // Capturas nas diagonais
    for file_delta in [-1, 1] {
        let target = from.offset(file_delta, forward);
        if let Some(victim) = board.piece_at(target) {
            if victim.color != color {
                push_pawn_move(from, target, Some(victim.kind), promotion_rank, &mut moves);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_single_and_double_push() {
        let board = Board::new();
        let moves = generate_pawn_moves(&board, Square::new(4, 1), Color::White);
        assert_eq!(moves.len(), 2);

        let black = generate_pawn_moves(&board, Square::new(4, 6), Color::Black);
        assert!(black.iter().any(|mv| mv.to == Square::new(4, 4)));
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        let board = Board::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w").unwrap();
        assert!(generate_pawn_moves(&board, Square::new(4, 2), Color::White).is_empty());
    }

    #[test]
    fn test_pawn_captures_diagonally() {
        let board = Board::from_fen("4k3/8/8/3p1n2/4P3/8/8/4K3 w").unwrap();
        let moves = generate_pawn_moves(&board, Square::new(4, 3), Color::White);
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 2);
    }

    #[test]
    fn test_promotion_expands_to_four_moves() {
        let board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w").unwrap();
        let moves = generate_pawn_moves(&board, Square::new(0, 6), Color::White);
        // 4 promoções simples + 4 promoções com captura em b8
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 4);
    }
}
