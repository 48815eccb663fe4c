//! A subnet placed by the allocator.

use super::{HostCount, NetworkBlock};
use serde::Serialize;
use std::net::Ipv4Addr;

/// One subnet carved out of the major network for a single requirement.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Requirement name.
    pub name: String,
    /// Hosts that were asked for.
    pub hosts_needed: u64,
    /// The allocated block, `network/prefix`.
    pub subnet: NetworkBlock,
    /// Addresses in the block, `2^(32 - prefix)`.
    pub block_size: u64,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    /// Usable addresses left over after `hosts_needed`.
    pub wasted: u64,
}

impl Allocation {
    /// Build the allocation for `hosts` at the aligned block `subnet`.
    ///
    /// `None` if the block has fewer usable addresses than `hosts`.
    pub(crate) fn new(name: &str, hosts: HostCount, subnet: NetworkBlock) -> Option<Allocation> {
        let wasted = subnet.usable_hosts().checked_sub(hosts.get())?;
        let network = u32::from(subnet.addr());
        let broadcast = u32::from(subnet.hi());
        Some(Allocation {
            name: name.to_string(),
            hosts_needed: hosts.get(),
            subnet,
            block_size: subnet.size(),
            network: subnet.addr(),
            broadcast: subnet.hi(),
            first_usable: Ipv4Addr::from(network.saturating_add(1)),
            last_usable: Ipv4Addr::from(broadcast.saturating_sub(1)),
            wasted,
        })
    }

    pub fn prefix(&self) -> u8 {
        self.subnet.prefix()
    }

    /// Host addresses in the block.
    pub fn usable(&self) -> u64 {
        self.subnet.usable_hosts()
    }
}
