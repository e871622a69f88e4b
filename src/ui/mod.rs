//! Console output for the flight boards

mod table;

pub use table::{emphasis_style, BoardTable};
