//! IPv4 address codec.
//!
//! Converts between dotted-decimal text and [`Ipv4Addr`]/`u32`. The decoder
//! is stricter than `Ipv4Addr::from_str`: it reports octet-count and
//! numeric-range problems separately so the caller can surface them as
//! [`SubnetError::Format`] vs [`SubnetError::Range`].

use crate::error::SubnetError;
use std::net::Ipv4Addr;

/// Render a 32-bit value as four big-endian octets joined with `.`.
///
/// Total over all `u32` values, no failure mode.
///
/// # Examples
/// ```
/// use subnet_calc::models::encode;
/// assert_eq!(encode(0xC0A80101), "192.168.1.1");
/// ```
pub fn encode(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// Parse a dotted-decimal IPv4 address.
///
/// Requires exactly 4 `.`-separated tokens, each a plain run of ASCII digits
/// in [0, 255]. Signed, empty, or non-numeric tokens fail with
/// [`SubnetError::Format`]; numeric tokens above 255 fail with
/// [`SubnetError::Range`]. Leading zeros are accepted (`192.168.001.1`).
pub fn decode(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != 4 {
        return Err(SubnetError::Format(format!(
            "'{text}' has {} octets, expected 4",
            tokens.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (i, token) in tokens.iter().enumerate() {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::Format(format!(
                "octet '{token}' in '{text}' is not a decimal number"
            )));
        }
        let value: u64 = token
            .parse()
            .map_err(|_| SubnetError::Range(format!("octet '{token}' in '{text}'")))?;
        if value > 255 {
            return Err(SubnetError::Range(format!("octet {value} in '{text}'")));
        }
        octets[i] = value as u8;
    }

    Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
}
