use crate::core::*;

/// Valor de uma posição em que o rei adversário já foi capturado.
/// Metade do máximo representável para não transbordar ao combinar com outros termos.
pub const WIN_SCORE: f64 = f64::MAX / 2.0;

pub const MATERIAL_WEIGHT: f64 = 12.0;
pub const MOBILITY_WEIGHT: f64 = 5.0;
pub const KING_SAFETY_WEIGHT: f64 = 8.0;
pub const PAWN_STRUCTURE_WEIGHT: f64 = 2.0;

/// Pontua um nó do ponto de vista do lado maximizador.
pub trait Heuristic<N> {
    fn evaluate(&self, node: &N) -> f64;
}

impl<N, H: Heuristic<N> + ?Sized> Heuristic<N> for &H {
    fn evaluate(&self, node: &N) -> f64 {
        (**self).evaluate(node)
    }
}

/// Heurística de xadrez: material, mobilidade, segurança do rei e estrutura de peões.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessHeuristic;

impl Heuristic<ChessNode> for ChessHeuristic {
    fn evaluate(&self, node: &ChessNode) -> f64 {
        evaluate_position(node.board(), node.max_player())
    }
}

/// Avaliação estática do tabuleiro para `max_player`
pub fn evaluate_position(board: &Board, max_player: Color) -> f64 {
    let min_player = !max_player;

    // Rei adversário capturado
    if !board.has_king(min_player) {
        return WIN_SCORE;
    }
    // Nós terminais também chegam aqui: perder o próprio rei é o simétrico
    if !board.has_king(max_player) {
        return -WIN_SCORE;
    }

    let score = MATERIAL_WEIGHT * material_score(board, max_player)
        + MOBILITY_WEIGHT * mobility_score(board, max_player)
        + KING_SAFETY_WEIGHT * king_safety_score(board, max_player)
        + PAWN_STRUCTURE_WEIGHT * pawn_structure_score(board, max_player);

    score.clamp(-f64::MAX, f64::MAX)
}

/// Diferença de pontos de material entre os dois lados
pub fn material_score(board: &Board, max_player: Color) -> f64 {
    let material = |color: Color| -> i32 { board.pieces(color).map(|(_, piece)| piece.kind.points()).sum() };
    (material(max_player) - material(!max_player)) as f64
}

/// Diferença do número de lances disponíveis a todas as peças de cada lado
pub fn mobility_score(board: &Board, max_player: Color) -> f64 {
    let mobility = |color: Color| board.generate_moves(color).len() as i64;
    (mobility(max_player) - mobility(!max_player)) as f64
}

/// Maior quando o rei adversário está menos protegido
pub fn king_safety_score(board: &Board, max_player: Color) -> f64 {
    let safety = |color: Color| board.king_square(color).map_or(0, |king| king_safety(board, king, color));
    (safety(!max_player) - safety(max_player)) as f64
}

/// +2 por peça amiga vizinha, -3 por peça inimiga, -1 por casa vazia
fn king_safety(board: &Board, king: Square, color: Color) -> i32 {
    king.neighbors()
        .map(|neighbor| match board.piece_at(neighbor) {
            Some(piece) if piece.color == color => 2,
            Some(_) => -3,
            None => -1,
        })
        .sum()
}

/// Penalizações de peões dobrados e isolados, lado maximizador menos minimizador
pub fn pawn_structure_score(board: &Board, max_player: Color) -> f64 {
    (pawn_structure(board, max_player) - pawn_structure(board, !max_player)) as f64
}

fn pawn_structure(board: &Board, color: Color) -> i32 {
    let pawns: Vec<Square> = board.pieces_of(color, PieceKind::Pawn).collect();
    let mut score = 0;

    for &pawn in &pawns {
        let doubled = pawns.iter().any(|&other| other != pawn && other.file == pawn.file);
        if doubled {
            score -= 2;
        }

        let isolated = ![-1, 1].iter().any(|&delta| {
            let file = pawn.file + delta;
            (0..8).contains(&file) && pawns.iter().any(|other| other.file == file)
        });
        if isolated {
            score -= 3;
        }
    }
    score
}
