//! Gap finding between allocated subnets.
//!
//! Identifies unused IP address ranges inside the major network and splits
//! them into the largest aligned CIDR blocks.

use crate::error::VlsmError;
use crate::models::{lo_mask, Allocation, NetworkBlock, MAX_LENGTH};
use std::net::Ipv4Addr;

/// List the free space of `major` not covered by `allocations`, in address order.
///
/// Alignment gaps between allocations and the space after the last one are both
/// included, so the block sizes add up to the report's `addresses_remaining`.
pub fn unused_blocks(
    major: NetworkBlock,
    allocations: &[Allocation],
) -> Result<Vec<NetworkBlock>, VlsmError> {
    let mut used: Vec<(u64, u64)> = allocations
        .iter()
        .map(|a| (a.subnet.lo_u64(), a.subnet.end_u64()))
        .collect();
    used.sort_unstable();

    let end = major.end_u64();
    let mut free = Vec::new();
    let mut next_ip = major.lo_u64();
    for (lo, hi_end) in used.into_iter().chain(std::iter::once((end, end))) {
        while next_ip < lo {
            let mask = find_biggest_subnet(next_ip, major.prefix(), lo);
            // next_ip < lo <= 2^32
            let gap = NetworkBlock::new(Ipv4Addr::from(next_ip as u32), mask)?;
            log::trace!("Unused block {gap}");
            next_ip = gap.end_u64();
            free.push(gap);
        }
        next_ip = next_ip.max(hi_end);
    }
    Ok(free)
}

/// Find the biggest subnet starting at `start_ip` that ends at or before `below`.
///
/// The returned mask is constrained by:
/// 1. The `start_mask` parameter (won't return a smaller mask)
/// 2. The IP alignment - `start_ip` must be a valid network address for the mask
/// 3. The subnet must not reach `below`
fn find_biggest_subnet(start_ip: u64, start_mask: u8, below: u64) -> u8 {
    debug_assert!(start_ip < below, "start_ip[{start_ip}] >= below[{below}]");

    let min_mask_for_alignment = lo_mask(Ipv4Addr::from(start_ip as u32));
    let mut next_mask = start_mask.max(min_mask_for_alignment);

    while start_ip + (1u64 << (MAX_LENGTH - next_mask)) > below {
        next_mask += 1;
    }
    next_mask
}
