//! Built-in form controls.
//!
//! Each control is a plain value with builder methods and an
//! implementation of [`Control`](crate::Control) that renders it.

pub mod input;
pub mod select;

pub use input::TextInput;
pub use select::SelectBox;
