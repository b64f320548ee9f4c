//! Log entries and their tabular view.

mod table;
mod types;

pub use table::{Cell, Column, Row, Table};
pub use types::{Entry, Symptoms};
