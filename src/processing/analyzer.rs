//! Address plus prefix length, and everything derived from it.

use super::cidr::{
    broadcast_addr, cut_addr, get_cidr_mask, host_range, ipv6_scope, is_private, num_hosts,
};
use crate::error::FormatError;
use crate::models::{is_decimal, Address, Family, HostCount, Ipv6Scope};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// What closes off a network: the IPv4 broadcast address, or the IPv6 scope.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Boundary {
    Broadcast(Address),
    Scope(Ipv6Scope),
}

/// A parsed `<address>[/<prefix>]` expression.
///
/// The prefix never exceeds the bit width of the address family. All derived
/// values are computed on demand from the stored bytes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Analyzer {
    ip: Address,
    cidr: u8,
}

impl Analyzer {
    /// Parse an expression such as `192.168.0.1/24` or `2001:db8::1/64`.
    ///
    /// Without a `/prefix` the full family width is used, so the expression
    /// names a single host.
    ///
    /// # Examples
    /// ```
    /// use ip_analyzer::processing::Analyzer;
    /// let analyzer = Analyzer::new("192.168.178.0/24").unwrap();
    /// assert_eq!(analyzer.broadcast().unwrap().to_string(), "192.168.178.255");
    /// assert!(Analyzer::new("192.168.0.1/33").is_err());
    /// ```
    pub fn new(ip_cidr: &str) -> Result<Analyzer, FormatError> {
        let ip_cidr = ip_cidr.trim();
        let (addr_part, prefix_part) = match ip_cidr.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (ip_cidr, None),
        };

        let ip: Address = addr_part.parse()?;
        let cidr = match prefix_part {
            Some(prefix) => parse_prefix(prefix, ip.family())?,
            None => ip.max_length(),
        };
        log::debug!("Analyzer::new({ip_cidr}) family={} cidr=/{cidr}", ip.family());
        Ok(Analyzer { ip, cidr })
    }

    /// Build from an already parsed address.
    pub fn from_parts(ip: Address, cidr: u8) -> Result<Analyzer, FormatError> {
        if cidr > ip.max_length() {
            return Err(invalid_prefix(&cidr.to_string(), ip.family()));
        }
        Ok(Analyzer { ip, cidr })
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn family(&self) -> Family {
        self.ip.family()
    }

    /// The prefix length.
    pub fn cidr(&self) -> u8 {
        self.cidr
    }

    pub fn network(&self) -> Address {
        cut_addr(self.ip, self.cidr)
    }

    pub fn netmask(&self) -> Address {
        get_cidr_mask(self.family(), self.cidr)
    }

    /// Broadcast address. IPv6 has none.
    pub fn broadcast(&self) -> Option<Address> {
        match self.boundary() {
            Boundary::Broadcast(addr) => Some(addr),
            Boundary::Scope(_) => None,
        }
    }

    /// Scope class of the address itself (not of the network). IPv4 has none.
    pub fn scope(&self) -> Option<Ipv6Scope> {
        match self.boundary() {
            Boundary::Scope(scope) => Some(scope),
            Boundary::Broadcast(_) => None,
        }
    }

    /// Broadcast for IPv4, scope for IPv6.
    pub fn boundary(&self) -> Boundary {
        match ipv6_scope(self.ip) {
            Some(scope) => Boundary::Scope(scope),
            None => Boundary::Broadcast(broadcast_addr(self.ip, self.cidr)),
        }
    }

    /// First and last usable host address.
    pub fn host_range(&self) -> (Address, Address) {
        host_range(self.ip, self.cidr)
    }

    pub fn num_hosts(&self) -> HostCount {
        num_hosts(self.family(), self.cidr)
    }

    pub fn is_private(&self) -> bool {
        is_private(self.ip)
    }
}

fn invalid_prefix(prefix: &str, family: Family) -> FormatError {
    FormatError::new(format!(
        "Invalid prefix value '{prefix}': must be 0-{} for {family}",
        family.max_length()
    ))
}

fn parse_prefix(prefix: &str, family: Family) -> Result<u8, FormatError> {
    if !is_decimal(prefix) {
        return Err(invalid_prefix(prefix, family));
    }
    match prefix.parse::<u8>() {
        Ok(cidr) if cidr <= family.max_length() => Ok(cidr),
        _ => Err(invalid_prefix(prefix, family)),
    }
}

impl FromStr for Analyzer {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Analyzer::new(s)
    }
}

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.cidr)
    }
}

impl Serialize for Analyzer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Analyzer {
    fn deserialize<D>(deserializer: D) -> Result<Analyzer, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Analyzer::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR: {e}")))
    }
}
