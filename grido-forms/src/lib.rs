//! Form controls and containers for Grido.
//!
//! Controls are plain owned values that render to an `htmldom::Element`.
//! A [`Container`] owns named controls and nested containers and assigns each
//! control its HTML `name` (`parent[child]`) when it is attached.
//!
//! # Example
//!
//! ```
//! use grido_forms::{Container, TextInput};
//!
//! let mut form = Container::form("grid");
//! let edit = form.get_or_add_container("editstatus");
//! let control = edit.add_control("7", Box::new(TextInput::with_value("open")));
//! assert_eq!(control.html_name(), "editstatus[7]");
//! ```

mod component;
mod container;
mod control;
pub mod widgets;

pub use component::Component;
pub use container::Container;
pub use control::Control;
pub use widgets::{SelectBox, TextInput};
