//! VLSM subnet planner.
//!
//! Partitions a parent IPv4 block into aligned subnets sized for a list of
//! host-count requirements, largest first, and reports how well the space is used.
//!
//! ```
//! use vlsm_subnet_planner::{calculate_vlsm, RequirementInput};
//!
//! let reqs = vec![
//!     RequirementInput::new(Some("Sales"), 100),
//!     RequirementInput::new(Some("WAN"), 2),
//! ];
//! let result = calculate_vlsm("192.168.1.0", 24, &reqs).unwrap();
//! assert_eq!(result.allocations[0].subnet.to_string(), "192.168.1.0/25");
//! assert_eq!(result.report.addresses_remaining, 124);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use models::{normalize_requirements, parse_ipv4, Allocation, NetworkBlock};
use processing::{
    allocate, build_report, build_table, order_largest_first, unused_blocks, AllocationReport,
    TableRow,
};
use serde::Serialize;

pub use error::VlsmError;
pub use models::RequirementInput;

/// Everything a successful calculation produces.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VlsmResult {
    /// Allocations in placement order (largest requirement first).
    pub allocations: Vec<Allocation>,
    pub report: AllocationReport,
    /// Table rows, the last one being the totals row.
    pub table: Vec<TableRow>,
    /// Free aligned blocks left in the major network.
    pub unused: Vec<NetworkBlock>,
}

/// Plan subnets for `requirements` inside `network/prefix`.
///
/// Requirements with zero or negative hosts are dropped first.
pub fn calculate_vlsm(
    network: &str,
    prefix: u8,
    requirements: &[RequirementInput],
) -> Result<VlsmResult, VlsmError> {
    let major = NetworkBlock::new(parse_ipv4(network)?, prefix)?;
    plan_subnets(major, requirements)
}

/// Same as [`calculate_vlsm`] with the major network in CIDR form, `"10.0.0.0/22"`.
pub fn calculate_vlsm_cidr(
    cidr: &str,
    requirements: &[RequirementInput],
) -> Result<VlsmResult, VlsmError> {
    plan_subnets(NetworkBlock::parse(cidr)?, requirements)
}

/// Plan subnets for `requirements` inside an already parsed major network.
pub fn plan_subnets(
    major: NetworkBlock,
    requirements: &[RequirementInput],
) -> Result<VlsmResult, VlsmError> {
    log::info!(
        "#Start plan_subnets() {major} with {} requirement rows",
        requirements.len()
    );

    let ordered = order_largest_first(normalize_requirements(requirements));
    let allocations = allocate(major, &ordered)?;
    let report = build_report(major, &allocations);
    let table = build_table(&allocations, &report);
    let unused = unused_blocks(major, &allocations)?;

    log::info!(
        "Allocated {}/{} addresses in {} subnets, efficiency {}",
        report.total_allocated,
        report.total_available,
        allocations.len(),
        report.efficiency_display()
    );

    Ok(VlsmResult {
        allocations,
        report,
        table,
        unused,
    })
}
