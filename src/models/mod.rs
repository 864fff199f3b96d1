//! Domain models for ip-analyzer.
//!
//! This module contains the value types the analyzer works with:
//! - [`Address`] - IPv4 or IPv6 address
//! - [`Family`] - address family and its bit width
//! - [`Ipv6Scope`] - scope class of an IPv6 address
//! - [`HostCount`] - usable host count, or the IPv6 "unbounded" sentinel

mod address;
mod host_count;
mod scope;

// Re-export public types
pub(crate) use address::is_decimal;
pub use address::{Address, Family, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use host_count::HostCount;
pub use scope::Ipv6Scope;
