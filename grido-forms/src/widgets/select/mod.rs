//! Select box with a fixed list of items.

mod render;
mod state;

pub use state::SelectBox;
