//! quickconvert-session - state owned by the calling application
//!
//! The conversion engine is pure; everything stateful lives here as an
//! explicit struct the caller owns, never as process-wide globals.

mod history;
mod session;

pub use history::{History, HistoryEntry, DISPLAY_WINDOW};
pub use session::Session;
