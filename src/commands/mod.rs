//! Command implementations

pub mod check;
pub mod share;
pub mod simple;
pub mod stats;

pub use check::run_check;
pub use share::{run_share, session_share_text};
pub use simple::{enter_word, run_simple};
pub use stats::run_stats;
