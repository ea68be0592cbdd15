//! Error taxonomy for the subnet calculator.
//!
//! Every error is terminal for the invocation: the caller reports it and
//! exits non-zero. There is no retry or partial-output path.

use thiserror::Error;

/// Errors produced while parsing or classifying input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Input is not a syntactically valid address, CIDR, or mask token.
    #[error("invalid format: {0}")]
    Format(String),

    /// Numeric value outside allowed bounds (octet > 255, prefix > 32).
    /// Reported the same way as a format error.
    #[error("value out of range: {0}")]
    Range(String),

    /// Primary token matches neither the CIDR nor the mask grammar.
    #[error("unrecognized input '{0}': expected a CIDR like /24 or a subnet mask like 255.255.255.0 (see --help)")]
    Unrecognized(String),
}
