//! Output formatting for evaluation results.
//!
//! This module handles rendering the structured results:
//! - [`terminal`] - human-readable output with colors
//! - [`json`] - machine-readable JSON
//! - [`cheatsheet`] - the /0../32 reference table

mod cheatsheet;
mod json;
mod terminal;

pub use cheatsheet::render_cheatsheet;
pub use json::render_json;
pub use terminal::Presenter;
