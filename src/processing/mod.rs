//! Subnet calculation logic.
//!
//! This module contains the working parts of the calculator:
//! - [`validate`] - classification of raw input strings
//! - [`analyze`] - derivation of subnet facts from address + prefix
//! - [`query`] - the string-in/struct-out boundary the CLI calls

mod analyze;
mod query;
mod validate;

// Re-export public functions
pub use analyze::analyze;
pub use query::{evaluate, Direction, Evaluation};
pub use validate::{is_valid_address, is_valid_cidr_token, is_valid_subnet_mask, parse_cidr_token};
