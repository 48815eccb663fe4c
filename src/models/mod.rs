//! Domain models for VLSM planning.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkBlock`] - IPv4 CIDR block plus address/prefix arithmetic
//! - [`HostRequirement`] - named host-count requirement
//! - [`Allocation`] - a subnet placed by the allocator

mod allocation;
mod ipv4;
mod requirement;

// Re-export public types
pub use allocation::Allocation;
pub use ipv4::{
    block_size, cut_addr, format_ipv4, get_cidr_mask, lo_mask, minimal_prefix_for, parse_ipv4,
    usable_hosts, NetworkBlock, MAX_LENGTH, RESERVED_PER_BLOCK,
};
pub use requirement::{normalize_requirements, HostCount, HostRequirement, RequirementInput};
