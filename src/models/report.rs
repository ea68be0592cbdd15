//! Derived subnet facts.
//!
//! [`SubnetReport`] is the read-only aggregate computed by
//! [`crate::processing::analyze`]; nothing mutates it after construction.

use crate::models::mask::PrefixLength;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Classful address class, taken from the first octet of the network
/// address. Octets 0 and 127 fall through to E; the classful rules never
/// assigned them and this tool does not invent a class for them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Address-space category of the network address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum AddressCategory {
    Private,
    Loopback,
    LinkLocal,
    Public,
}

impl fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressCategory::Private => "Private",
            AddressCategory::Loopback => "Loopback",
            AddressCategory::LinkLocal => "Link-Local (APIPA)",
            AddressCategory::Public => "Public",
        };
        write!(f, "{name}")
    }
}

/// Full subnet facts for one address/prefix pair.
///
/// `first_host`/`last_host` are `None` when `usable_hosts` is 0 (/31 and
/// /32), so degenerate wrapped values never reach the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    #[serde(serialize_with = "ser_ip")]
    pub network: Ipv4Addr,
    #[serde(serialize_with = "ser_ip")]
    pub broadcast: Ipv4Addr,
    #[serde(serialize_with = "ser_opt_ip")]
    pub first_host: Option<Ipv4Addr>,
    #[serde(serialize_with = "ser_opt_ip")]
    pub last_host: Option<Ipv4Addr>,
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub class: AddressClass,
    pub category: AddressCategory,
    #[serde(serialize_with = "ser_ip")]
    pub mask: Ipv4Addr,
    pub prefix: PrefixLength,
}

pub(crate) fn ser_ip<S>(ip: &Ipv4Addr, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ip.to_string())
}

pub(crate) fn ser_opt_ip<S>(ip: &Option<Ipv4Addr>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ip {
        Some(ip) => serializer.serialize_some(&ip.to_string()),
        None => serializer.serialize_none(),
    }
}
