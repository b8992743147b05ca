//! Output formatting for draws

pub mod console;
pub mod formatter;
