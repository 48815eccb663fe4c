//! IPv4 address and CIDR prefix arithmetic.
//!
//! Provides dotted-decimal parsing, the [`NetworkBlock`] type for a CIDR block,
//! and the prefix/host-count helpers the allocator is built on.

use crate::error::VlsmError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Addresses in every block that cannot be given to hosts (network + broadcast).
pub const RESERVED_PER_BLOCK: u64 = 2;

/// Parse a dotted-decimal IPv4 address.
///
/// Exactly four segments of ASCII digits, each in 0-255, are accepted.
///
/// # Examples
/// ```
/// use vlsm_subnet_planner::models::parse_ipv4;
/// assert_eq!(parse_ipv4("192.168.1.0").unwrap().to_string(), "192.168.1.0");
/// assert!(parse_ipv4("999.1.1.1").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, VlsmError> {
    let invalid = || VlsmError::InvalidAddress(text.to_string());

    let parts: Vec<&str> = text.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse::<u8>().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Format an address as four dot-separated decimal octets.
pub fn format_ipv4(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, VlsmError> {
    check_prefix(len)?;
    Ok(mask_bits(len))
}

/// Number of addresses in a block with the given prefix, `2^(32 - len)`.
pub fn block_size(len: u8) -> Result<u64, VlsmError> {
    check_prefix(len)?;
    Ok(size_bits(len))
}

/// Addresses assignable to hosts: block size minus network and broadcast.
///
/// `/31` and `/32` have no usable hosts under this model.
pub fn usable_hosts(len: u8) -> Result<u64, VlsmError> {
    check_prefix(len)?;
    Ok(usable_bits(len))
}

/// Smallest block (largest prefix) with room for `hosts` plus network and broadcast.
///
/// Returns `None` when even a `/0` is too small.
///
/// # Examples
/// ```
/// use vlsm_subnet_planner::models::minimal_prefix_for;
/// assert_eq!(minimal_prefix_for(50), Some(26));
/// assert_eq!(minimal_prefix_for(u64::from(u32::MAX)), None);
/// ```
pub fn minimal_prefix_for(hosts: u64) -> Option<u8> {
    let host_bits = hosts
        .checked_add(RESERVED_PER_BLOCK)?
        .checked_next_power_of_two()?
        .trailing_zeros();
    if host_bits > MAX_LENGTH as u32 {
        None
    } else {
        Some(MAX_LENGTH - host_bits as u8)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, VlsmError> {
    Ok(Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len)?))
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

fn check_prefix(len: u8) -> Result<(), VlsmError> {
    if len > MAX_LENGTH {
        Err(VlsmError::InvalidPrefix(len as u32))
    } else {
        Ok(())
    }
}

fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

fn size_bits(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len)
}

fn usable_bits(len: u8) -> u64 {
    size_bits(len).saturating_sub(RESERVED_PER_BLOCK)
}

/// An IPv4 CIDR block whose address always has the host bits cleared.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Build a block from an address and prefix length.
    ///
    /// Host bits set in `addr` are cleared and a warning is logged.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<NetworkBlock, VlsmError> {
        let base = cut_addr(addr, prefix)?;
        if base != addr {
            log::warn!("{addr}/{prefix} has host bits set, using network address {base}/{prefix}");
        }
        Ok(NetworkBlock { addr: base, prefix })
    }

    /// Parse a CIDR string such as `"10.0.0.0/24"`.
    pub fn parse(cidr: &str) -> Result<NetworkBlock, VlsmError> {
        let cidr = cidr.trim();
        let (addr, prefix) = cidr
            .split_once('/')
            .ok_or_else(|| VlsmError::InvalidAddress(cidr.to_string()))?;
        let addr = parse_ipv4(addr)?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VlsmError::InvalidAddress(cidr.to_string()));
        }
        let prefix: u32 = prefix
            .parse()
            .map_err(|_| VlsmError::InvalidAddress(cidr.to_string()))?;
        let prefix = u8::try_from(prefix)
            .ok()
            .filter(|p| *p <= MAX_LENGTH)
            .ok_or(VlsmError::InvalidPrefix(prefix))?;
        NetworkBlock::new(addr, prefix)
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Dotted-decimal subnet mask.
    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    /// Total addresses in the block.
    pub fn size(&self) -> u64 {
        size_bits(self.prefix)
    }

    /// Addresses assignable to hosts, see [`usable_hosts`].
    pub fn usable_hosts(&self) -> u64 {
        usable_bits(self.prefix)
    }

    /// Get the lowest (network) address as a 64-bit offset-friendly value.
    pub fn lo_u64(&self) -> u64 {
        u32::from(self.addr) as u64
    }

    /// One past the highest address of the block.
    pub fn end_u64(&self) -> u64 {
        self.lo_u64() + self.size()
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.prefix))
    }

    /// True if `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & mask_bits(self.prefix) == u32::from(self.addr)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::parse(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
