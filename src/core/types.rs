// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do modelo de jogo.

use crate::search::{MoveKind, SearchMove};
use std::fmt;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "brancas"),
            Color::Black => write!(f, "pretas"),
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pontos de material usados pela heurística.
    /// O rei vale 0: quando o material é contado os dois reis estão sempre presentes.
    pub fn points(&self) -> i32 {
        match self {
            PieceKind::Pawn   => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook   => 5,
            PieceKind::Queen  => 9,
            PieceKind::King   => 0,
        }
    }

    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Letra FEN: maiúscula para as brancas, minúscula para as pretas.
    pub fn to_char(&self) -> char {
        let ch = self.kind.to_char();
        if self.color == Color::White { ch.to_ascii_uppercase() } else { ch }
    }
}

/// As 8 direções vizinhas de uma casa (coluna, linha).
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Casa do tabuleiro em coordenadas (coluna, linha), ambas em 0..8.
/// Pode representar casas fora do tabuleiro; use `is_inbounds` antes de indexar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    pub fn from_index(index: usize) -> Self {
        Square::new((index % 8) as i8, (index / 8) as i8)
    }

    #[inline]
    pub fn is_inbounds(&self) -> bool {
        (0..8).contains(&self.file) && (0..8).contains(&self.rank)
    }

    #[inline]
    pub fn index(&self) -> usize {
        debug_assert!(self.is_inbounds());
        (self.rank * 8 + self.file) as usize
    }

    #[inline]
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Square {
        Square::new(self.file + file_delta, self.rank + rank_delta)
    }

    /// Casas vizinhas dentro do tabuleiro.
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(df, dr)| self.offset(df, dr))
            .filter(Square::is_inbounds)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.file as u8 + b'a') as char;
        let rank = (self.rank as u8 + b'1') as char;
        write!(f, "{}{}", file, rank)
    }
}

// Struct para representar um lance no jogo.
// Guarda a casa de origem e a de destino, a peça movida e o que foi capturado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl SearchMove for Move {
    // Uma promoção com captura conta como captura.
    fn kind(&self) -> MoveKind {
        if self.is_capture() {
            MoveKind::Capture
        } else if self.is_promotion() {
            MoveKind::Promotion
        } else {
            MoveKind::Quiet
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = self.promotion {
            write!(f, "{}{}{}", self.from, self.to, p.to_char())
        } else {
            write!(f, "{}{}", self.from, self.to)
        }
    }
}
