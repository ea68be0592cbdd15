//! CIDR reference table.
//!
//! Renders every prefix /0../32 with its mask and host counts, computed from
//! the same converter and analyzer as the main path.

use crate::models::{PrefixLength, MAX_LENGTH};
use crate::processing::analyze;
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Build the /0../32 reference table.
pub fn render_cheatsheet(color: bool) -> String {
    let header = format!(
        "{:<6} {:<16} {:>12} {:>12}",
        "CIDR", "Netmask", "Total", "Usable"
    );
    let header = if color {
        header.cyan().bold().to_string()
    } else {
        header
    };

    let rows = (0..=MAX_LENGTH)
        .map(|len| {
            // len is bounded by the iteration range
            let prefix = PrefixLength::new(len).expect("prefix in 0..=32");
            let report = analyze(Ipv4Addr::UNSPECIFIED, prefix);
            format!(
                "{:<6} {:<16} {:>12} {:>12}",
                prefix,
                Ipv4Addr::from(prefix.to_mask()),
                report.total_addresses,
                report.usable_hosts
            )
        })
        .join("\n");

    format!("{header}\n{rows}")
}
