//! Blocking, modal "in-game message" dialog.
//!
//! `show_message` acquires a surface and texture on the host backend, builds a captioned
//! window with the message and an Ok button, and polls input until the user confirms. The
//! dialog owns nothing that outlives the call except the host window, which is created on
//! first use and reused afterwards.

pub mod builder;
pub mod controller;
pub mod display;
pub mod error;
pub mod router;

pub use controller::{DialogSession, Phase};
pub use error::SetupError;
pub use router::{DismissCause, LoopState};

use crate::settings::DialogSettings;
use crate::ui::backend::Backend;

/// Message text for one dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogRequest {
    text: String,
}

impl DialogRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Shows `request` and blocks until dismissed.
pub fn try_show_message<B: Backend + ?Sized>(
    backend: &mut B,
    request: &DialogRequest,
    settings: &DialogSettings,
) -> Result<(), SetupError> {
    let mut session = DialogSession::new(backend);
    session.init(request.text(), settings)?;
    session.run();
    session.halt();
    Ok(())
}

/// Like `try_show_message`, but a setup failure ends the process: the error is logged,
/// the window is destroyed so the host display is usable again, and the process exits
/// with status 1.
pub fn show_message<B: Backend + ?Sized>(backend: &mut B, text: &str, settings: &DialogSettings) {
    let request = DialogRequest::new(text);
    if let Err(err) = try_show_message(backend, &request, settings) {
        fatal(backend, &err);
    }
}

fn fatal<B: Backend + ?Sized>(backend: &mut B, err: &SetupError) -> ! {
    tracing::error!(resource = err.resource(), error = %err, "dialog setup failed");
    backend.destroy_window();
    eprintln!("ingame-message: {err}");
    std::process::exit(1);
}
