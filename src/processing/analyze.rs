//! Subnet derivation.
//!
//! Given a validated address and prefix length, derives the full
//! [`SubnetReport`]. Total: there is no failure path once the inputs are
//! individually valid.

use crate::models::{AddressCategory, AddressClass, PrefixLength, SubnetReport};
use std::net::Ipv4Addr;

/// Compute the full subnet facts for `addr` under `prefix`.
pub fn analyze(addr: Ipv4Addr, prefix: PrefixLength) -> SubnetReport {
    let mask = prefix.to_mask();
    let addr_bits = u32::from(addr);
    let network_bits = addr_bits & mask;
    // network | !mask keeps /0 in range where a logical shift by 32 would not
    let broadcast_bits = network_bits | !mask;

    let total_addresses = 1u64 << (32 - prefix.get() as u32);
    let usable_hosts = if total_addresses > 2 {
        total_addresses - 2
    } else {
        // /31 and /32: RFC 3021 point-to-point usage is not modeled
        0
    };

    let (first_host, last_host) = if usable_hosts > 0 {
        (
            Some(Ipv4Addr::from(network_bits + 1)),
            Some(Ipv4Addr::from(broadcast_bits - 1)),
        )
    } else {
        (None, None)
    };

    let network = Ipv4Addr::from(network_bits);
    let report = SubnetReport {
        network,
        broadcast: Ipv4Addr::from(broadcast_bits),
        first_host,
        last_host,
        total_addresses,
        usable_hosts,
        class: address_class(network),
        category: address_category(network),
        mask: Ipv4Addr::from(mask),
        prefix,
    };
    log::debug!("analyze({addr}, {prefix}) -> {report:?}");
    report
}

/// Classful address class from the first octet of the network address.
/// 0 and 127 fall through to E (inherited rule, not corrected here).
fn address_class(network: Ipv4Addr) -> AddressClass {
    match network.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        _ => AddressClass::E,
    }
}

/// Address-space category from the network address's first two octets.
fn address_category(network: Ipv4Addr) -> AddressCategory {
    let [o1, o2, _, _] = network.octets();
    match (o1, o2) {
        (10, _) | (172, 16..=31) | (192, 168) => AddressCategory::Private,
        (127, _) => AddressCategory::Loopback,
        (169, 254) => AddressCategory::LinkLocal,
        _ => AddressCategory::Public,
    }
}
