//! Error types

mod config;
mod field;
mod grid;
mod source;

pub use config::*;
pub use field::*;
pub use grid::*;
pub use source::*;
