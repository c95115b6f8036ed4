//! Contrato do nó da árvore de jogo consumido pela busca
//!
//! A busca só precisa de saber quem joga num nó, se é terminal, quais são os
//! filhos e que tipo de lance os produziu. O valor de utilidade vive no próprio
//! nó: cada nó tem um único escritor (a chamada de busca que o possui) e um
//! único leitor (o pai).

/// Quem está a jogar no nó: o lado maximizador ou o minimizador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Max,
    Min,
}

impl NodeType {
    #[inline]
    pub fn opposite(self) -> NodeType {
        match self {
            NodeType::Max => NodeType::Min,
            NodeType::Min => NodeType::Max,
        }
    }
}

/// Classificação grosseira de um lance, usada pela ordenação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Capture,
    Promotion,
    Quiet,
}

/// Um lance que sabe dizer de que tipo é.
pub trait SearchMove {
    fn kind(&self) -> MoveKind;
}

/// Nó de uma árvore de dois jogadores de soma zero.
///
/// `utility_value` está sempre na escala do lado maximizador, para que os
/// limiares alpha/beta de uma subárvore continuem válidos nas irmãs.
pub trait GameTreeNode: Sized {
    type Move: SearchMove;

    fn node_type(&self) -> NodeType;

    fn is_terminal(&self) -> bool;

    /// Sucessores por um lance, na ordem do modelo de jogo. Vazio num nó terminal.
    fn children(&self) -> Vec<Self>;

    /// Lance que produziu este nó; `None` na raiz.
    fn get_move(&self) -> Option<&Self::Move>;

    fn utility_value(&self) -> f64;

    fn set_utility_value(&mut self, value: f64);
}
