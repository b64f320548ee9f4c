//! Interactive collection of daily entries.
//!
//! [`Prompter`] owns the console and its validate-and-retry loops.
//! [`EntryCollector`] drives one prompt sequence per day and keeps the
//! session's entries in the order they were logged.

mod collector;
mod prompts;

pub use collector::EntryCollector;
pub use prompts::{parse_bounded_int, IntInputError, Prompter};
