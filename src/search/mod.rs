pub mod alpha_beta;
pub mod cross_check;
pub mod evaluation;
pub mod minimax;
pub mod move_ordering;
pub mod node;
pub mod search_thread;

#[cfg(test)]
pub(crate) mod test_tree;

pub use alpha_beta::*;
pub use cross_check::*;
pub use evaluation::*;
pub use minimax::*;
pub use move_ordering::*;
pub use node::*;
pub use search_thread::*;
