//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`encode`] / [`decode`] - dotted-decimal IPv4 codec
//! - [`PrefixLength`] - validated CIDR prefix length with mask conversion
//! - [`SubnetReport`] - derived subnet facts

mod ipv4;
mod mask;
mod report;

// Re-export public types
pub use ipv4::{decode, encode};
pub(crate) use report::ser_ip;
pub use mask::{is_contiguous, PrefixLength, MAX_LENGTH};
pub use report::{AddressCategory, AddressClass, SubnetReport};
