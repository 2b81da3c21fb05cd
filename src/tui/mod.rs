//! Terminal integration (crossterm): the "window" guard and event translation used by the
//! terminal display backend.

pub mod crossterm;
pub mod terminal_guard;
