//! ingame-message - blocking modal message dialog over a host display backend.
//!
//! Module layout:
//! - core: input events shared by backends and the toolkit
//! - ui: drawing primitives, the off-screen surface, host backends, the widget toolkit
//! - dialog: the modal loop (display adapter, widget tree, input router, controller)
//! - settings: dialog settings and the host input map
//! - tui: terminal plumbing for the terminal backend

pub mod core;
pub mod dialog;
pub mod settings;
pub mod tui;
pub mod ui;

pub use dialog::{show_message, try_show_message, DialogRequest, DismissCause, SetupError};
pub use settings::DialogSettings;
