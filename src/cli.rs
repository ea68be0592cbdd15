//! Command-line surface.
//!
//! Everything here is presentation glue: arguments are handed to
//! [`crate::processing::evaluate`] as plain strings and the structured
//! result is rendered by [`crate::output`].

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "subnet-calc",
    version,
    disable_version_flag = true,
    about = "IPv4 subnetting calculator",
    long_about = "Convert between CIDR prefix lengths and subnet masks, and \
                  derive full subnet facts (network, broadcast, host range, \
                  class, category) for a base address."
)]
pub struct Cli {
    /// CIDR prefix (e.g. /24) or subnet mask (e.g. 255.255.255.0)
    #[arg(value_name = "CIDR|MASK", required_unless_present = "cheatsheet")]
    pub token: Option<String>,

    /// Base IPv4 address to derive the full subnet report against
    #[arg(value_name = "BASE_IP")]
    pub base: Option<String>,

    /// Print the /0../32 reference table and exit
    #[arg(short = 'c', long)]
    pub cheatsheet: bool,

    /// Emit the result as JSON instead of the table view
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}
