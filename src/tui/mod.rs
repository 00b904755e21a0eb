//! Terminal User Interface (TUI) module
//!
//! Live view of a scripted wizard replay.

pub mod runner;
pub mod state;
pub mod widgets;


// Re-export commonly used types
pub use runner::{ExitReason, TuiRunner};
pub use state::{ActiveStage, WatchState};
