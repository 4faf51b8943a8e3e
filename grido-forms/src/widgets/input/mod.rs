//! Single-line text input.

mod render;
mod state;

pub use state::TextInput;
