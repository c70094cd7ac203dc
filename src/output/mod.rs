//! Output formatting for command results.
//!
//! - [`terminal`] - line and coloured yes/no formatting

mod terminal;

pub use terminal::{format_bool, format_line, format_option};
