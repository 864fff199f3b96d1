//! IPv6 scope classes.

use serde::Serialize;
use std::fmt;

/// Scope of an IPv6 address, taken from its leading bytes.
///
/// Loopback (`::1`) has no class of its own and reports [`Ipv6Scope::Global`].
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize)]
pub enum Ipv6Scope {
    /// `fe80::/10`
    #[serde(rename = "Link-Local")]
    LinkLocal,
    /// `fc00::/7`
    #[serde(rename = "Unique-Local")]
    UniqueLocal,
    /// `ff00::/8`
    Multicast,
    Global,
}

impl Ipv6Scope {
    /// Classify from the first two bytes of an IPv6 address.
    pub fn classify(first: u8, second: u8) -> Ipv6Scope {
        match first {
            0xFE if second & 0xC0 == 0x80 => Ipv6Scope::LinkLocal,
            0xFC | 0xFD => Ipv6Scope::UniqueLocal,
            0xFF => Ipv6Scope::Multicast,
            _ => Ipv6Scope::Global,
        }
    }
}

impl fmt::Display for Ipv6Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Ipv6Scope::LinkLocal => "Link-Local",
            Ipv6Scope::UniqueLocal => "Unique-Local",
            Ipv6Scope::Multicast => "Multicast",
            Ipv6Scope::Global => "Global",
        };
        write!(f, "{label}")
    }
}
