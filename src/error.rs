//! Tipos de erro do motor
//!
//! Erros de leitura de posições FEN, de configuração e de execução da busca.
//! Um timeout não é um erro: é o resultado `SearchOutcome::TimedOut`.

use thiserror::Error;

/// Erros ao construir um tabuleiro a partir de FEN
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },

    #[error("Invalid piece: {0}")]
    InvalidPiece(char),

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),
}

/// Erros de configuração da busca
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time budget must be greater than zero")]
    ZeroPlaytime,
}

/// Falhas fatais durante a busca; quem chama deve abortar a sessão
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to spawn search worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("search worker failed: {reason}")]
    WorkerFailed { reason: String },
}
