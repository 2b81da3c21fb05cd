use ingame_message::settings::DialogSettings;
use ingame_message::show_message;
use ingame_message::ui::backend::terminal::TerminalBackend;
use ingame_message::ui::backend::DisplayBackend;

mod logging;

const DEFAULT_MESSAGE: &str = "Disk image not found";

fn main() {
    let _logging = logging::init();

    let mut messages: Vec<String> = std::env::args().skip(1).collect();
    if messages.is_empty() {
        messages.push(DEFAULT_MESSAGE.to_string());
    }

    let settings = DialogSettings::from_env();
    let mut backend = TerminalBackend::new();

    // The host owns the window; every dialog below reuses it.
    if let Err(err) = backend.create_window(&settings.window_title) {
        tracing::error!(error = %err, "failed to create window");
        eprintln!("ingame-message: failed to create window: {err}");
        std::process::exit(1);
    }

    install_signal_handlers(&backend);

    for message in &messages {
        show_message(&mut backend, message, &settings);
    }

    backend.destroy_window();
    tracing::info!(count = messages.len(), "all messages acknowledged");
}

#[cfg(unix)]
fn install_signal_handlers(backend: &TerminalBackend) {
    let Some(restorer) = backend.restorer() else {
        return;
    };
    if let Err(err) = ingame_message::tui::terminal_guard::install_termination_signals(restorer) {
        tracing::warn!(error = %err, "signal handlers unavailable");
    }
}

#[cfg(not(unix))]
fn install_signal_handlers(_backend: &TerminalBackend) {}
