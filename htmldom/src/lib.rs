pub mod element;
pub mod render;
pub mod text;

pub use element::{Content, Element};
pub use render::render_to_string;
pub use text::{escape_attr, escape_text};
