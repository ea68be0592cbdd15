//! Input classification.
//!
//! Decides whether a raw string is a dotted-decimal address, a CIDR token
//! (`/0`..`/32`), or a contiguous subnet mask. Pure checks, no side effects.

use crate::models::{decode, is_contiguous};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CIDR_RE: Regex = Regex::new(r"^/(\d{1,2})$").expect("Invalid Regex?");
}

/// True iff [`decode`] would succeed on the string.
pub fn is_valid_address(text: &str) -> bool {
    decode(text).is_ok()
}

/// True iff the string is `/` followed by 1-2 digits denoting a value in
/// [0, 32]. A third digit fails the pattern outright.
pub fn is_valid_cidr_token(text: &str) -> bool {
    parse_cidr_token(text).is_some()
}

/// Extract the prefix value from a CIDR token, if it is one.
pub fn parse_cidr_token(text: &str) -> Option<u8> {
    let caps = CIDR_RE.captures(text)?;
    // 1-2 digits always fit a u8
    let value: u8 = caps[1].parse().expect("regex guarantees 1-2 digits");
    (value <= 32).then_some(value)
}

/// True iff the string is a valid address whose 32-bit pattern is a
/// contiguous run of 1s then 0s. `255.255.0.255` is rejected.
pub fn is_valid_subnet_mask(text: &str) -> bool {
    match decode(text) {
        Ok(addr) => is_contiguous(u32::from(addr)),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("192.168.1.1"));
        assert!(is_valid_address("0.0.0.0"));
        assert!(!is_valid_address("256.1.1.1"));
        assert!(!is_valid_address("1.1.1"));
        assert!(!is_valid_address("/24"));
    }

    #[test]
    fn test_is_valid_cidr_token() {
        assert!(is_valid_cidr_token("/0"));
        assert!(is_valid_cidr_token("/24"));
        assert!(is_valid_cidr_token("/32"));
        assert!(!is_valid_cidr_token("/33"));
        assert!(!is_valid_cidr_token("/99"));
        assert!(!is_valid_cidr_token("/024")); // third digit
        assert!(!is_valid_cidr_token("/abc"));
        assert!(!is_valid_cidr_token("/"));
        assert!(!is_valid_cidr_token("24"));
        assert!(!is_valid_cidr_token("/24 "));
        assert!(!is_valid_cidr_token("/-1"));
    }

    #[test]
    fn test_parse_cidr_token() {
        assert_eq!(parse_cidr_token("/24"), Some(24));
        assert_eq!(parse_cidr_token("/0"), Some(0));
        assert_eq!(parse_cidr_token("/32"), Some(32));
        assert_eq!(parse_cidr_token("/33"), None);
        assert_eq!(parse_cidr_token("x/24"), None);
    }

    #[test]
    fn test_is_valid_subnet_mask() {
        assert!(is_valid_subnet_mask("0.0.0.0"));
        assert!(is_valid_subnet_mask("255.0.0.0"));
        assert!(is_valid_subnet_mask("255.255.255.0"));
        assert!(is_valid_subnet_mask("255.255.255.252"));
        assert!(is_valid_subnet_mask("255.255.255.255"));
        // non-contiguous
        assert!(!is_valid_subnet_mask("255.255.0.255"));
        assert!(!is_valid_subnet_mask("255.0.255.0"));
        assert!(!is_valid_subnet_mask("0.255.255.255"));
        // not even an address
        assert!(!is_valid_subnet_mask("255.255.255"));
        assert!(!is_valid_subnet_mask("mask"));
    }
}
