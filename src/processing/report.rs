//! Aggregate metrics and the per-subnet table for a finished allocation.

use crate::models::{Allocation, NetworkBlock};
use serde::Serialize;

/// Label of the trailing totals row.
pub const TOTALS_ROW_NAME: &str = "Total";

/// Summary of how well the allocations use the major network.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AllocationReport {
    /// The major network that was partitioned.
    pub network: NetworkBlock,
    pub total_available: u64,
    pub total_hosts_needed: u64,
    /// Sum of allocated block sizes.
    pub total_allocated: u64,
    /// Sum of per-allocation waste, alignment gaps not included.
    pub total_wasted: u64,
    /// Addresses not in any block, alignment gaps included.
    pub addresses_remaining: u64,
    /// Hosts needed as a percentage of allocated addresses, one decimal place.
    pub efficiency: f64,
}

impl AllocationReport {
    /// Efficiency formatted as `"84.2%"`.
    pub fn efficiency_display(&self) -> String {
        format!("{:.1}%", self.efficiency)
    }
}

/// Represents a row of the allocation table for output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub hosts_needed: u64,
    /// `"/26 (64)"` for subnets, allocated address count for the totals row.
    pub size: String,
    /// `"192.168.1.0/26"`.
    pub network: String,
    pub mask: String,
    /// `"first – last"` for subnets, remaining address count for the totals row.
    pub usable_range: String,
    pub broadcast: String,
    pub wasted: u64,
}

/// Derive the aggregate metrics for `allocations` inside `major`.
pub fn build_report(major: NetworkBlock, allocations: &[Allocation]) -> AllocationReport {
    let total_available = major.size();
    let total_hosts_needed: u64 = allocations.iter().map(|a| a.hosts_needed).sum();
    let total_allocated: u64 = allocations.iter().map(|a| a.block_size).sum();
    let total_wasted: u64 = allocations.iter().map(|a| a.wasted).sum();

    let efficiency = if total_allocated == 0 {
        0.0
    } else {
        let percent = total_hosts_needed as f64 / total_allocated as f64 * 100.0;
        (percent * 10.0).round() / 10.0
    };

    AllocationReport {
        network: major,
        total_available,
        total_hosts_needed,
        total_allocated,
        total_wasted,
        addresses_remaining: total_available.saturating_sub(total_allocated),
        efficiency,
    }
}

/// One row per allocation followed by a totals row.
pub fn build_table(allocations: &[Allocation], report: &AllocationReport) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = allocations.iter().map(allocation_row).collect();
    rows.push(TableRow {
        name: TOTALS_ROW_NAME.to_string(),
        hosts_needed: report.total_hosts_needed,
        size: format!("{} allocated", report.total_allocated),
        network: String::new(),
        mask: String::new(),
        usable_range: format!("{} remaining", report.addresses_remaining),
        broadcast: String::new(),
        wasted: report.total_wasted,
    });
    rows
}

fn allocation_row(a: &Allocation) -> TableRow {
    TableRow {
        name: a.name.clone(),
        hosts_needed: a.hosts_needed,
        size: format!("/{} ({})", a.prefix(), a.block_size),
        network: a.subnet.to_string(),
        mask: a.subnet.mask().to_string(),
        usable_range: format!("{} – {}", a.first_usable, a.last_usable),
        broadcast: a.broadcast.to_string(),
        wasted: a.wasted,
    }
}
