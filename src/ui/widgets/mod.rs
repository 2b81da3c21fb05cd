//! Minimal widget toolkit: a root container holding one captioned window with a label and
//! a button, driven by `Gui`.

pub mod action;
pub mod button;
pub mod container;
pub mod font;
pub mod gui;
pub mod label;
pub mod window;

pub use action::{ActionEvent, ActionListener};
pub use button::Button;
pub use container::Container;
pub use font::{Font, FontError};
pub use gui::Gui;
pub use label::Label;
pub use window::Window;
