//! VLSM planning logic.
//!
//! This module contains the steps of a calculation:
//! - [`ordering`] - Largest-first ordering of requirements
//! - [`allocator`] - Aligned greedy placement of subnets
//! - [`report`] - Totals, efficiency and the allocation table
//! - [`gap_finder`] - Unused space left in the major network

mod allocator;
mod gap_finder;
mod ordering;
mod report;

// Re-export public functions
pub use allocator::allocate;
pub use gap_finder::unused_blocks;
pub use ordering::order_largest_first;
pub use report::{build_report, build_table, AllocationReport, TableRow, TOTALS_ROW_NAME};
