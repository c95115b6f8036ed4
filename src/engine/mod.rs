pub mod agent;
pub mod clock;
pub mod config;

pub use agent::*;
pub use clock::*;
pub use config::*;
