//! Terminal output with colors.
//!
//! Renders an [`Evaluation`] as aligned label/value rows. Color is an
//! explicit configuration bit on the presenter, not ambient process state.

use crate::processing::{Direction, Evaluation};
use colored::Colorize;

const LABEL_WIDTH: usize = 12;

/// Human-readable presenter for evaluation results.
pub struct Presenter {
    color: bool,
}

impl Presenter {
    pub fn new(color: bool) -> Presenter {
        Presenter { color }
    }

    /// Render the full result: the conversion line(s), then the subnet
    /// report when a base address was supplied.
    pub fn render(&self, eval: &Evaluation) -> String {
        let mut lines = match eval.direction {
            Direction::CidrToMask => vec![
                self.row("CIDR", &eval.cidr()),
                self.row("Netmask", &eval.mask.to_string()),
            ],
            Direction::MaskToCidr => vec![
                self.row("Netmask", &eval.mask.to_string()),
                self.row("CIDR", &eval.cidr()),
            ],
        };

        if let Some(report) = &eval.report {
            lines.push(String::new());
            lines.push(self.row("Network", &format!("{}{}", report.network, eval.cidr())));
            lines.push(self.row("Broadcast", &report.broadcast.to_string()));
            // degenerate /31 and /32 host bounds are never shown
            if report.usable_hosts > 0 {
                if let (Some(first), Some(last)) = (report.first_host, report.last_host) {
                    lines.push(self.row("HostMin", &first.to_string()));
                    lines.push(self.row("HostMax", &last.to_string()));
                }
            }
            lines.push(self.row(
                "Hosts/Net",
                &format!(
                    "{} usable of {} total",
                    report.usable_hosts, report.total_addresses
                ),
            ));
            lines.push(self.row("Class", &report.class.to_string()));
            lines.push(self.row("Category", &report.category.to_string()));
        }

        lines.join("\n")
    }

    /// One `Label:    value` row with the label padded to a fixed width.
    fn row(&self, label: &str, value: &str) -> String {
        let label = format!("{:<LABEL_WIDTH$}", format!("{label}:"));
        if self.color {
            format!("{} {}", label.cyan(), value.bold())
        } else {
            format!("{label} {value}")
        }
    }

    /// Error line for stderr.
    pub fn render_error(&self, message: &str) -> String {
        if self.color {
            format!("{} {message}", "error:".red().bold())
        } else {
            format!("error: {message}")
        }
    }
}
