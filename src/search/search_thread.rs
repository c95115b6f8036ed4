// Ficheiro: src/search/search_thread.rs
// Descrição: Executa uma busca numa thread dedicada, com prazo. Ao expirar, a busca é abandonada.

use super::alpha_beta::AlphaBetaSearcher;
use super::evaluation::Heuristic;
use super::node::GameTreeNode;
use crate::error::SearchError;
use crossbeam::channel::{self, RecvTimeoutError};
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Flag de paragem partilhada entre quem espera e a thread de busca.
/// O cancelamento é cooperativo: a busca consulta a flag entre filhos.
#[derive(Debug, Default)]
pub struct SearchController {
    stop: AtomicBool,
}

impl SearchController {
    pub fn new() -> Self {
        SearchController { stop: AtomicBool::new(false) }
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Raiz e profundidade de uma busca. A raiz passa a pertencer à thread de busca.
#[derive(Debug, Clone)]
pub struct SearchTask<N> {
    root: N,
    depth: u8,
}

impl<N> SearchTask<N> {
    pub fn new(root: N, depth: u8) -> Self {
        SearchTask { root, depth }
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn into_parts(self) -> (N, u8) {
        (self.root, self.depth)
    }
}

/// Lance escolhido (ausente se a raiz era terminal) e tempo gasto em milissegundos.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    mv: Option<M>,
    elapsed_ms: u64,
}

impl<M> SearchResult<M> {
    pub fn new(mv: Option<M>, elapsed_ms: u64) -> Self {
        SearchResult { mv, elapsed_ms }
    }

    pub fn mv(&self) -> Option<&M> {
        self.mv.as_ref()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn into_move(self) -> Option<M> {
        self.mv
    }
}

/// Resultado de `run_with_deadline`. Expirar o prazo não é um erro.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<M> {
    Completed(SearchResult<M>),
    /// O prazo inteiro é cobrado, não o tempo parcial.
    TimedOut { charged_ms: u64 },
}

impl<M> SearchOutcome<M> {
    /// Milissegundos a descontar ao relógio de quem jogou.
    pub fn charged_ms(&self) -> u64 {
        match self {
            SearchOutcome::Completed(result) => result.elapsed_ms(),
            SearchOutcome::TimedOut { charged_ms } => *charged_ms,
        }
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, SearchOutcome::TimedOut { .. })
    }
}

/// Converte para milissegundos, saturando em `u64::MAX`.
#[inline]
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Resultado de um trabalho corrido com prazo.
#[derive(Debug)]
pub(crate) enum Deadline<T> {
    Finished { value: T, elapsed_ms: u64 },
    Expired,
}

/// Corre `job` numa thread com nome `name` e espera no máximo `deadline`.
///
/// Ao expirar, a flag de paragem é levantada e a thread é deixada para trás;
/// o que ela ainda produzir é descartado. Um pânico é devolvido como
/// `SearchError::WorkerFailed`.
pub(crate) fn run_worker<T, F>(name: &str, deadline: Duration, job: F) -> Result<Deadline<T>, SearchError>
where
    T: Send + 'static,
    F: FnOnce(Arc<SearchController>) -> T + Send + 'static,
{
    let controller = Arc::new(SearchController::new());
    let worker_controller = Arc::clone(&controller);
    let (tx, rx) = channel::bounded(1);

    let started = Instant::now();
    let handle = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let value = job(worker_controller);
            // Se já ninguém espera, o envio falha e o resultado é descartado
            let _ = tx.send(value);
        })
        .map_err(SearchError::Spawn)?;

    match rx.recv_timeout(deadline) {
        Ok(value) => {
            let elapsed_ms = duration_ms(started.elapsed());
            if let Err(payload) = handle.join() {
                return Err(worker_failed(payload));
            }
            Ok(Deadline::Finished { value, elapsed_ms })
        }
        Err(RecvTimeoutError::Timeout) => {
            controller.stop();
            Ok(Deadline::Expired)
        }
        Err(RecvTimeoutError::Disconnected) => {
            let err = match handle.join() {
                Err(payload) => worker_failed(payload),
                Ok(()) => SearchError::WorkerFailed { reason: "worker exited without a result".to_string() },
            };
            error!(worker = name, "{}", err);
            Err(err)
        }
    }
}

/// Lança a busca alfa-beta numa thread e espera no máximo `deadline` pelo resultado.
///
/// Ao expirar, o prazo inteiro é cobrado e o lance da thread abandonada nunca é lido.
pub fn run_with_deadline<N, H>(
    task: SearchTask<N>,
    heuristic: H,
    deadline: Duration,
) -> Result<SearchOutcome<N::Move>, SearchError>
where
    N: GameTreeNode + Send + 'static,
    N::Move: Clone + Send + 'static,
    H: Heuristic<N> + Send + 'static,
{
    debug!(depth = task.depth(), deadline_ms = duration_ms(deadline), "busca lançada");

    let outcome = run_worker("alfabeta-search", deadline, move |controller| {
        let (root, depth) = task.into_parts();
        let mut searcher = AlphaBetaSearcher::new(heuristic).with_controller(controller);
        let best = searcher.search_root(root, depth);
        best.get_move().cloned()
    })?;

    match outcome {
        Deadline::Finished { value: mv, elapsed_ms } => {
            info!(elapsed_ms, found = mv.is_some(), "busca concluída");
            Ok(SearchOutcome::Completed(SearchResult::new(mv, elapsed_ms)))
        }
        Deadline::Expired => {
            let charged_ms = duration_ms(deadline);
            warn!(charged_ms, "prazo esgotado, busca abandonada");
            Ok(SearchOutcome::TimedOut { charged_ms })
        }
    }
}

fn worker_failed(payload: Box<dyn Any + Send>) -> SearchError {
    let reason = if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    };
    SearchError::WorkerFailed { reason }
}
