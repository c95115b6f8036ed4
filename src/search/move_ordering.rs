// Ficheiro: src/search/move_ordering.rs
// Descrição: Ordenação dos filhos antes da expansão: capturas, promoções, restantes.

use super::node::{GameTreeNode, MoveKind, SearchMove};

/// Prioridade de um filho; menor é expandido primeiro.
#[inline]
fn bucket<N: GameTreeNode>(node: &N) -> u8 {
    match node.get_move().map(|mv| mv.kind()) {
        Some(MoveKind::Capture) => 0,
        Some(MoveKind::Promotion) => 1,
        Some(MoveKind::Quiet) | None => 2,
    }
}

/// Partição estável em três grupos. Dentro de cada grupo a ordem de entrada é mantida.
pub fn order_children<N: GameTreeNode>(children: Vec<N>) -> Vec<N> {
    let mut captures = Vec::new();
    let mut promotions = Vec::new();
    let mut others = Vec::with_capacity(children.len());

    for child in children {
        match bucket(&child) {
            0 => captures.push(child),
            1 => promotions.push(child),
            _ => others.push(child),
        }
    }

    captures.append(&mut promotions);
    captures.append(&mut others);
    captures
}
