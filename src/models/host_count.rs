//! Number of usable hosts in a network.

use serde::Serialize;
use std::fmt;

/// Host count of a network.
///
/// IPv6 networks of /64 or larger report [`HostCount::Unbounded`]; every
/// other count fits in a `u64`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum HostCount {
    Finite(u64),
    Unbounded,
}

impl HostCount {
    pub fn finite(&self) -> Option<u64> {
        match self {
            HostCount::Finite(n) => Some(*n),
            HostCount::Unbounded => None,
        }
    }
}

impl fmt::Display for HostCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostCount::Finite(n) => write!(f, "{n}"),
            HostCount::Unbounded => write!(f, "Unbounded (2^64 or more)"),
        }
    }
}

/// Finite counts serialize as numbers, the sentinel as `"unbounded"`.
impl Serialize for HostCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            HostCount::Finite(n) => serializer.serialize_u64(*n),
            HostCount::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}
