//! CIDR analysis logic.
//!
//! This module contains the derivations built on top of [`crate::models`]:
//! - [`cidr`] - netmask, network, broadcast, host range, host count, private check
//! - [`analyzer`] - parsing `<address>[/<prefix>]` into an [`Analyzer`]
//! - [`report`] - a snapshot of every derived value, as labeled rows

mod analyzer;
mod cidr;
mod report;

// Re-export public types and functions
pub use analyzer::{Analyzer, Boundary};
pub use cidr::{
    broadcast_addr, cut_addr, get_cidr_mask, host_range, ipv6_scope, is_private, next_addr,
    num_hosts, prev_addr,
};
pub use report::{Report, ReportRow};
