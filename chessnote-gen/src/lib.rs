pub mod board;
pub mod error;
pub mod fen;
pub mod pgn;
pub mod san;

pub use error::{NotationError, Result};
