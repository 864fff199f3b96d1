//! CIDR arithmetic over 4- and 16-byte addresses.
//!
//! Every function here is total. A prefix length longer than the address
//! family is treated as the full width.

use crate::models::{Address, Family, HostCount, Ipv6Scope, MAX_LENGTH_V4, MAX_LENGTH_V6};

/// Private IPv4 blocks as (network, prefix length).
const PRIVATE_V4: [([u8; 4], u8); 3] = [
    ([10, 0, 0, 0], 8),
    ([172, 16, 0, 0], 12),
    ([192, 168, 0, 0], 16),
];

/// Longest IPv6 prefix whose host count is reported as unbounded.
const UNBOUNDED_V6_MAX_LEN: u8 = 64;

fn mask_bytes<const N: usize>(len: u8) -> [u8; N] {
    let mut mask = [0u8; N];
    let full_bytes = usize::from(len / 8);
    let rem_bits = len % 8;
    for b in mask.iter_mut().take(full_bytes) {
        *b = 0xFF;
    }
    if rem_bits > 0 && full_bytes < N {
        mask[full_bytes] = 0xFF << (8 - rem_bits);
    }
    mask
}

fn combine<const N: usize>(bytes: [u8; N], mask: [u8; N], op: impl Fn(u8, u8) -> u8) -> [u8; N] {
    let mut out = [0u8; N];
    for ((o, b), m) in out.iter_mut().zip(bytes).zip(mask) {
        *o = op(b, m);
    }
    out
}

fn with_mask(addr: Address, len: u8, op: impl Fn(u8, u8) -> u8) -> Address {
    let len = len.min(addr.max_length());
    match addr {
        Address::V4(b) => Address::V4(combine(b, mask_bytes(len), op)),
        Address::V6(b) => Address::V6(combine(b, mask_bytes(len), op)),
    }
}

fn carry_add<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    for b in bytes.iter_mut().rev() {
        let (value, overflow) = b.overflowing_add(1);
        *b = value;
        if !overflow {
            break;
        }
    }
    bytes
}

fn borrow_sub<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    for b in bytes.iter_mut().rev() {
        let (value, underflow) = b.overflowing_sub(1);
        *b = value;
        if !underflow {
            break;
        }
    }
    bytes
}

/// Netmask for a prefix length in the given family.
///
/// # Examples
/// ```
/// use ip_analyzer::models::Family;
/// use ip_analyzer::processing::get_cidr_mask;
/// assert_eq!(get_cidr_mask(Family::Ipv4, 20).to_string(), "255.255.240.0");
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Address {
    let len = len.min(family.max_length());
    match family {
        Family::Ipv4 => Address::V4(mask_bytes(len)),
        Family::Ipv6 => Address::V6(mask_bytes(len)),
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Address, len: u8) -> Address {
    with_mask(addr, len, |b, m| b & m)
}

/// Highest address in the network: host bits all set.
///
/// For IPv4 this is the broadcast address.
pub fn broadcast_addr(addr: Address, len: u8) -> Address {
    with_mask(addr, len, |b, m| b | !m)
}

/// The address plus one, carrying across all bytes. Wraps at the top.
pub fn next_addr(addr: Address) -> Address {
    match addr {
        Address::V4(b) => Address::V4(carry_add(b)),
        Address::V6(b) => Address::V6(carry_add(b)),
    }
}

/// The address minus one, borrowing across all bytes. Wraps at zero.
pub fn prev_addr(addr: Address) -> Address {
    match addr {
        Address::V4(b) => Address::V4(borrow_sub(b)),
        Address::V6(b) => Address::V6(borrow_sub(b)),
    }
}

/// First and last usable host.
///
/// The two longest prefixes of each family (/31 and /32, /127 and /128) use
/// every address, so the range is the whole network.
pub fn host_range(addr: Address, len: u8) -> (Address, Address) {
    let len = len.min(addr.max_length());
    let network = cut_addr(addr, len);
    let last = broadcast_addr(addr, len);
    if len >= addr.max_length() - 1 {
        (network, last)
    } else {
        (next_addr(network), prev_addr(last))
    }
}

/// Calculate the number of usable host addresses for a prefix length.
///
/// IPv4 excludes the network and broadcast addresses. IPv6 has no broadcast,
/// so nothing is subtracted, and /64 or shorter is [`HostCount::Unbounded`].
pub fn num_hosts(family: Family, len: u8) -> HostCount {
    let len = len.min(family.max_length());
    match family {
        Family::Ipv4 => match MAX_LENGTH_V4 - len {
            0 => HostCount::Finite(1),
            1 => HostCount::Finite(2),
            host_bits => HostCount::Finite((1u64 << host_bits) - 2),
        },
        Family::Ipv6 if len <= UNBOUNDED_V6_MAX_LEN => HostCount::Unbounded,
        Family::Ipv6 => match MAX_LENGTH_V6 - len {
            0 => HostCount::Finite(1),
            1 => HostCount::Finite(2),
            host_bits => HostCount::Finite(1u64 << host_bits),
        },
    }
}

/// Private-range membership.
///
/// IPv4: `10/8`, `172.16/12` or `192.168/16`. IPv6: first byte `fc` or `fd`.
pub fn is_private(addr: Address) -> bool {
    match addr {
        Address::V4(_) => PRIVATE_V4
            .iter()
            .any(|(net, len)| cut_addr(addr, *len) == Address::V4(*net)),
        Address::V6(b) => matches!(b[0], 0xFC | 0xFD),
    }
}

/// Scope class of an IPv6 address. `None` for IPv4.
pub fn ipv6_scope(addr: Address) -> Option<Ipv6Scope> {
    match addr {
        Address::V4(_) => None,
        Address::V6(b) => Some(Ipv6Scope::classify(b[0], b[1])),
    }
}
