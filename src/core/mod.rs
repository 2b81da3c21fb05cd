//! Host-facing input vocabulary shared by backends, the toolkit and the dialog.

pub mod event;

pub use event::{ControllerButtonEvent, ControllerId, InputEvent};
