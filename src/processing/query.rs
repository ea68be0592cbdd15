//! Core boundary with the presentation layer.
//!
//! Accepts the raw primary token and optional base address as strings and
//! returns either a structured [`SubnetError`] or an [`Evaluation`].

use crate::error::SubnetError;
use crate::models::{decode, ser_ip, PrefixLength, SubnetReport};
use crate::processing::analyze::analyze;
use crate::processing::validate::{is_valid_subnet_mask, parse_cidr_token};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Which way the primary token was normalized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Direction {
    CidrToMask,
    MaskToCidr,
}

/// Structured result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub direction: Direction,
    pub prefix: PrefixLength,
    #[serde(serialize_with = "ser_ip")]
    pub mask: Ipv4Addr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SubnetReport>,
}

impl Evaluation {
    /// The CIDR notation of the prefix, e.g. `/24`.
    pub fn cidr(&self) -> String {
        self.prefix.to_string()
    }
}

/// Classify the primary token, normalize it to a prefix length, and (when a
/// base address is supplied) derive the full subnet report against it.
pub fn evaluate(primary: &str, base: Option<&str>) -> Result<Evaluation, SubnetError> {
    let primary = primary.trim();
    log::debug!("evaluate(primary={primary:?}, base={base:?})");

    let (direction, prefix) = if let Some(len) = parse_cidr_token(primary) {
        // constructor bound is redundant for a parsed token, but keeps the
        // invariant in one place
        (Direction::CidrToMask, PrefixLength::new(len)?)
    } else if is_valid_subnet_mask(primary) {
        let mask_addr = decode(primary)?;
        (
            Direction::MaskToCidr,
            PrefixLength::from_mask(u32::from(mask_addr)),
        )
    } else {
        log::warn!("unrecognized primary token: {primary:?}");
        return Err(SubnetError::Unrecognized(primary.to_string()));
    };

    let report = match base {
        Some(base) => Some(analyze(decode(base.trim())?, prefix)),
        None => None,
    };

    Ok(Evaluation {
        direction,
        prefix,
        mask: Ipv4Addr::from(prefix.to_mask()),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_to_mask() {
        let eval = evaluate("/24", None).unwrap();
        assert_eq!(eval.direction, Direction::CidrToMask);
        assert_eq!(eval.mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(eval.cidr(), "/24");
        assert!(eval.report.is_none());
    }

    #[test]
    fn test_mask_to_cidr() {
        let eval = evaluate("255.255.255.0", None).unwrap();
        assert_eq!(eval.direction, Direction::MaskToCidr);
        assert_eq!(eval.prefix.get(), 24);
        assert_eq!(eval.mask, Ipv4Addr::new(255, 255, 255, 0));
    }

    #[test]
    fn test_with_base_address() {
        let eval = evaluate("/24", Some("192.168.1.10")).unwrap();
        let report = eval.report.expect("base address must yield a report");
        assert_eq!(report.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(report.usable_hosts, 254);
    }

    #[test]
    fn test_trims_whitespace() {
        let eval = evaluate(" /16 ", Some(" 10.1.2.3 ")).unwrap();
        assert_eq!(eval.prefix.get(), 16);
        assert!(eval.report.is_some());
    }

    #[test]
    fn test_unrecognized_primary() {
        assert!(matches!(
            evaluate("banana", None),
            Err(SubnetError::Unrecognized(_))
        ));
        assert!(matches!(
            evaluate("/33", None),
            Err(SubnetError::Unrecognized(_))
        ));
        // non-contiguous mask is neither grammar
        assert!(matches!(
            evaluate("255.255.0.255", None),
            Err(SubnetError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_bad_base_address() {
        assert!(matches!(
            evaluate("/24", Some("256.1.1.1")),
            Err(SubnetError::Range(_))
        ));
        assert!(matches!(
            evaluate("/24", Some("1.1.1")),
            Err(SubnetError::Format(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let eval = evaluate("/24", None).unwrap();
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["direction"], "CidrToMask");
        assert_eq!(json["mask"], "255.255.255.0");
        assert_eq!(json["prefix"], 24);
        assert!(json.get("report").is_none());
    }
}
