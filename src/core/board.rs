// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use crate::error::BoardError;
use crate::moves;
use std::fmt;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

// Tabuleiro de referência em representação mailbox (uma célula por casa).
// Sem roque nem en passant: o jogo termina quando um rei é capturado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],

    // De quem é a vez de jogar.
    pub to_move: Color,
}

impl Board {
    /// Cria um tabuleiro vazio.
    pub fn empty(to_move: Color) -> Self {
        Board { squares: [None; 64], to_move }
    }

    /// Cria um novo tabuleiro na posição inicial padrão.
    pub fn new() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
            PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
        ];

        let mut board = Board::empty(Color::White);
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            board.set_piece(Square::new(file, 0), Some(Piece::new(kind, Color::White)));
            board.set_piece(Square::new(file, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set_piece(Square::new(file, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set_piece(Square::new(file, 7), Some(Piece::new(kind, Color::Black)));
        }
        board
    }

    /// Cria um novo tabuleiro a partir de uma string FEN.
    /// Só a disposição das peças e o jogador a mover são lidos; os restantes campos são ignorados.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(BoardError::InvalidFen { reason: "Wrong number of parts".to_string() });
        }

        let mut board = Board::empty(Color::White);

        // Parse board (parts[0])
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::InvalidFen { reason: "Wrong number of rows".to_string() });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as i8; // A primeira linha do FEN é a oitava fila
            let mut file: u32 = 0;
            for ch in row.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    file += digit; // Skip empty squares
                } else {
                    let kind = PieceKind::from_char(ch).ok_or(BoardError::InvalidPiece(ch))?;
                    let color = if ch.is_uppercase() { Color::White } else { Color::Black };
                    if file >= 8 {
                        return Err(BoardError::InvalidFen { reason: format!("Row too long: {}", row) });
                    }
                    board.set_piece(Square::new(file as i8, rank), Some(Piece::new(kind, color)));
                    file += 1;
                }
                if file > 8 {
                    return Err(BoardError::InvalidFen { reason: format!("Row too long: {}", row) });
                }
            }
            if file != 8 {
                return Err(BoardError::InvalidFen { reason: format!("Row must cover 8 files: {}", row) });
            }
        }

        // To move (parts[1])
        board.to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(BoardError::InvalidTurn(other.to_string())),
        };

        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if square.is_inbounds() { self.squares[square.index()] } else { None }
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Todas as peças de uma cor, com a casa onde estão.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(move |(idx, cell)| match cell {
            Some(piece) if piece.color == color => Some((Square::from_index(idx), *piece)),
            _ => None,
        })
    }

    /// Casas ocupadas pelas peças de um tipo e cor.
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.pieces(color).filter(move |(_, p)| p.kind == kind).map(|(sq, _)| sq)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).next()
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.king_square(color).is_some()
    }

    /// Lances pseudo-legais da peça numa casa, independentemente de quem joga.
    pub fn moves_from(&self, square: Square) -> Vec<Move> {
        match self.piece_at(square) {
            Some(piece) => moves::generate_piece_moves(self, square, piece),
            None => Vec::new(),
        }
    }

    /// Gera todos os lances pseudo-legais de uma cor.
    pub fn generate_moves(&self, color: Color) -> Vec<Move> {
        // Pre-aloca com capacidade estimada para reduzir realocações
        let mut moves = Vec::with_capacity(64);
        for (square, piece) in self.pieces(color) {
            moves.extend(moves::generate_piece_moves(self, square, piece));
        }
        moves
    }

    /// Gera todos os lances pseudo-legais para todas as peças do jogador atual.
    pub fn generate_all_moves(&self) -> Vec<Move> {
        self.generate_moves(self.to_move)
    }

    /// Executa um lance, atualizando o estado do tabuleiro.
    pub fn make_move(&mut self, mv: Move) {
        let moving = self.piece_at(mv.from);
        debug_assert!(moving.is_some(), "no piece on {}", mv.from);

        if let Some(mut piece) = moving {
            if let Some(promotion) = mv.promotion {
                piece.kind = promotion;
            }
            self.set_piece(mv.from, None);
            self.set_piece(mv.to, Some(piece));
        }
        self.to_move = !self.to_move;
    }

    /// O jogo termina quando falta um rei ou o jogador a mover não tem lances.
    pub fn is_game_over(&self) -> bool {
        !self.has_king(Color::White)
            || !self.has_king(Color::Black)
            || self.generate_all_moves().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let ch = self.piece_at(Square::new(file, rank)).map_or('.', |p| p.to_char());
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
