pub mod board;
pub mod game_node;
pub mod types;

pub use board::*;
pub use game_node::*;
pub use types::*;
