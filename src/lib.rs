// Alfabeta - Busca alfa-beta com prazo sobre árvores de jogo de dois jogadores

pub mod core;
pub mod engine;
pub mod error;
pub mod moves;
pub mod search;

pub use self::core::*;
pub use error::*;
