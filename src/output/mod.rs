//! Terminal output formatting

pub mod formatters;

pub use formatters::{colorize_guess, statuses_to_emoji};
