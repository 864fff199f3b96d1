//! IPv4 and IPv6 address values.
//!
//! Provides [`Address`], a fixed-width big-endian address in either family,
//! along with the text parsers and display forms used by the analyzer.

use crate::error::FormatError;
use itertools::Itertools;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

const OCTETS_V4: usize = 4;
const HEXTETS_V6: usize = 8;

static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();
static HEXTET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

fn get_hextet_regex() -> &'static Regex {
    HEXTET_REGEX.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{0,4}$").expect("Invalid Regex"))
}

/// True if `text` is a non-empty run of ASCII decimal digits.
pub(crate) fn is_decimal(text: &str) -> bool {
    get_decimal_regex().is_match(text)
}

/// Address family.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Serialize)]
pub enum Family {
    #[serde(rename = "IPv4")]
    Ipv4,
    #[serde(rename = "IPv6")]
    Ipv6,
}

impl Family {
    /// Family of an address literal: IPv6 if it contains a `:`.
    pub fn of(text: &str) -> Family {
        if text.contains(':') {
            Family::Ipv6
        } else {
            Family::Ipv4
        }
    }

    /// Bit width of the family, which is also its longest prefix.
    pub fn max_length(self) -> u8 {
        match self {
            Family::Ipv4 => MAX_LENGTH_V4,
            Family::Ipv6 => MAX_LENGTH_V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::Ipv4 => write!(f, "IPv4"),
            Family::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// A single IPv4 or IPv6 address in network byte order.
///
/// Ordering is byte-wise within a family; every IPv4 address sorts before
/// every IPv6 address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Parse a dotted-quad IPv4 address such as `192.168.0.1`.
    ///
    /// # Examples
    /// ```
    /// use ip_analyzer::models::Address;
    /// let addr = Address::parse_v4("192.168.0.1").unwrap();
    /// assert_eq!(addr.to_u32(), Some(3232235521));
    /// assert!(Address::parse_v4("256.0.0.1").is_err());
    /// ```
    pub fn parse_v4(text: &str) -> Result<Address, FormatError> {
        let groups: Vec<&str> = text.split('.').collect();
        if groups.len() > OCTETS_V4 {
            return Err(FormatError::new(format!(
                "Invalid IP address format: too many octets in '{text}'"
            )));
        }
        if groups.len() < OCTETS_V4 {
            return Err(FormatError::new(format!(
                "Invalid IP address format: not enough octets in '{text}'"
            )));
        }

        let mut octets = [0u8; 4];
        for (octet, group) in octets.iter_mut().zip(&groups) {
            *octet = parse_octet(group)?;
        }
        Ok(Address::V4(octets))
    }

    /// Parse a colon-hextet IPv6 address, with optional `::` compression.
    ///
    /// # Examples
    /// ```
    /// use ip_analyzer::models::Address;
    /// let addr = Address::parse_v6("2001:db8::1").unwrap();
    /// assert_eq!(addr.to_string(), "2001:0db8:0000:0000:0000:0000:0000:0001");
    /// ```
    pub fn parse_v6(text: &str) -> Result<Address, FormatError> {
        let groups = expand_hextets(text)?;
        if groups.len() != HEXTETS_V6 {
            return Err(FormatError::new(format!(
                "Invalid IPv6 address format: expected 8 groups, found {} in '{text}'",
                groups.len()
            )));
        }

        let mut bytes = [0u8; 16];
        for (pair, group) in bytes.chunks_exact_mut(2).zip(&groups) {
            pair.copy_from_slice(&parse_hextet(group)?.to_be_bytes());
        }
        Ok(Address::V6(bytes))
    }

    pub fn from_u32(bits: u32) -> Address {
        Address::V4(bits.to_be_bytes())
    }

    pub fn from_u128(bits: u128) -> Address {
        Address::V6(bits.to_be_bytes())
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::Ipv4,
            Address::V6(_) => Family::Ipv6,
        }
    }

    /// Bit width of this address (32 or 128).
    pub fn max_length(&self) -> u8 {
        self.family().max_length()
    }

    /// The raw bytes, most significant first.
    pub fn octets(&self) -> &[u8] {
        match self {
            Address::V4(b) => &b[..],
            Address::V6(b) => &b[..],
        }
    }

    /// The address as an integer. `None` for IPv6.
    pub fn to_u32(&self) -> Option<u32> {
        match self {
            Address::V4(b) => Some(u32::from_be_bytes(*b)),
            Address::V6(_) => None,
        }
    }

    /// The address as an integer, for either family.
    pub fn to_u128(&self) -> u128 {
        self.octets()
            .iter()
            .fold(0u128, |acc, b| (acc << 8) | u128::from(*b))
    }

    /// Fixed-width binary digits, 8 per byte (32 or 128 characters).
    pub fn to_binary_string(&self) -> String {
        self.octets().iter().map(|b| format!("{b:08b}")).collect()
    }
}

fn parse_octet(group: &str) -> Result<u8, FormatError> {
    if !is_decimal(group) {
        return Err(FormatError::new(format!(
            "Invalid IP address octet '{group}': not a decimal number"
        )));
    }
    group.parse::<u8>().map_err(|_| {
        FormatError::new(format!(
            "Invalid IP address octet value '{group}': must be 0-255"
        ))
    })
}

fn parse_hextet(group: &str) -> Result<u16, FormatError> {
    if !get_hextet_regex().is_match(group) {
        return Err(FormatError::new(format!("Invalid IPv6 hextet '{group}'")));
    }
    if group.is_empty() {
        log::warn!("Empty IPv6 group treated as 0000");
        return Ok(0);
    }
    let padded = format!("{group:0>4}");
    u16::from_str_radix(&padded, 16)
        .map_err(|_| FormatError::new(format!("Invalid IPv6 hextet '{group}'")))
}

/// Split one side of a `::`. An empty side holds no groups at all.
fn split_groups(side: &str) -> Vec<&str> {
    if side.is_empty() {
        Vec::new()
    } else {
        side.split(':').collect()
    }
}

/// Replace a `::` with the zero groups it stands for.
fn expand_hextets(text: &str) -> Result<Vec<&str>, FormatError> {
    let Some((left, right)) = text.split_once("::") else {
        return Ok(text.split(':').collect());
    };
    if right.contains("::") {
        return Err(FormatError::new(format!(
            "Invalid IPv6 address format: '::' used more than once in '{text}'"
        )));
    }

    let left = split_groups(left);
    let right = split_groups(right);
    let explicit = left.len() + right.len();
    if explicit >= HEXTETS_V6 {
        return Err(FormatError::new(format!(
            "Invalid IPv6 address format: too many groups around '::' in '{text}'"
        )));
    }
    let zeros = HEXTETS_V6 - explicit;
    log::trace!(
        "expand '{text}': left={} right={} zero groups={zeros}",
        left.len(),
        right.len()
    );

    Ok(left
        .into_iter()
        .chain(std::iter::repeat("0").take(zeros))
        .chain(right)
        .collect())
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Family::of(s) {
            Family::Ipv4 => Address::parse_v4(s),
            Family::Ipv6 => Address::parse_v6(s),
        }
    }
}

/// IPv4 as dotted quad, IPv6 as eight fully padded lower-case hextets.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Address::V4(b) => write!(f, "{}.{}.{}.{}", b[0], b[1], b[2], b[3]),
            Address::V6(b) => {
                let hextets = b
                    .chunks_exact(2)
                    .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
                    .join(":");
                write!(f, "{hextets}")
            }
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address::V6(addr.octets())
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Address::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(|e| de::Error::custom(format!("invalid address: {e}")))
    }
}
