//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, PendingReveal, REVEAL_DELAY, run_tui};
