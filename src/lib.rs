//! Geneva airport flights CLI library
//!
//! Exposes the data pipeline (cache, API source, decoding), the board view
//! model and the table renderer for the binary and for integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod logging;
pub mod ui;
pub mod view;
