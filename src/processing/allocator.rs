//! Greedy, alignment-respecting placement of subnets.
//!
//! Walks the major network from its base address, giving each requirement the
//! smallest block that fits, aligned to its own size. There is no backtracking:
//! a placed block is never moved.

use crate::error::{DisplayPrefix, VlsmError};
use crate::models::{block_size, minimal_prefix_for, Allocation, HostRequirement, NetworkBlock};
use std::net::Ipv4Addr;

/// Place every requirement inside `major`, in the order given.
///
/// Callers pass requirements already sorted largest first, see
/// [`order_largest_first`](super::order_largest_first). Any failure discards the
/// allocations made so far.
pub fn allocate(
    major: NetworkBlock,
    requirements: &[HostRequirement],
) -> Result<Vec<Allocation>, VlsmError> {
    if requirements.is_empty() {
        return Err(VlsmError::NoRequirements);
    }

    let (cursor, allocations) = requirements.iter().try_fold(
        (major.lo_u64(), Vec::with_capacity(requirements.len())),
        |(cursor, allocations), req| place(major, cursor, allocations, req),
    )?;

    log::debug!(
        "Allocated {} subnets in {major}, next free address offset {}",
        allocations.len(),
        cursor - major.lo_u64()
    );
    Ok(allocations)
}

/// Place one requirement at or after `cursor`, returning the advanced cursor.
fn place(
    major: NetworkBlock,
    cursor: u64,
    mut allocations: Vec<Allocation>,
    req: &HostRequirement,
) -> Result<(u64, Vec<Allocation>), VlsmError> {
    let hosts = req.hosts.get();
    let needed = minimal_prefix_for(hosts);
    let prefix = match needed {
        Some(prefix) if prefix >= major.prefix() => prefix,
        _ => {
            return Err(VlsmError::RequirementTooLarge {
                name: req.name.clone(),
                hosts,
                needed: DisplayPrefix(needed),
                available: major.prefix(),
            })
        }
    };

    let size = block_size(prefix)?;
    let start = align_up(cursor, size);
    if start + size > major.end_u64() {
        return Err(VlsmError::CapacityExceeded {
            name: req.name.clone(),
            hosts,
            prefix,
            network: major.to_string(),
        });
    }
    if start != cursor {
        log::debug!(
            "Skipping {} addresses to align /{prefix} for '{}'",
            start - cursor,
            req.name
        );
    }

    // start + size <= 2^32, so start fits in 32 bits
    let subnet = NetworkBlock::new(Ipv4Addr::from(start as u32), prefix)?;
    let allocation = Allocation::new(&req.name, req.hosts, subnet).ok_or_else(|| {
        VlsmError::RequirementTooLarge {
            name: req.name.clone(),
            hosts,
            needed: DisplayPrefix(needed),
            available: prefix,
        }
    })?;
    log::debug!(
        "Placed '{}' ({} hosts) at {} wasting {}",
        allocation.name,
        hosts,
        allocation.subnet,
        allocation.wasted
    );
    allocations.push(allocation);

    Ok((start + size, allocations))
}

/// Round `cursor` up to the next multiple of `size` (a power of two).
fn align_up(cursor: u64, size: u64) -> u64 {
    (cursor + size - 1) & !(size - 1)
}
