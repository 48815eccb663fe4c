//! Largest-first ordering of requirements.

use crate::models::HostRequirement;
use itertools::Itertools;
use std::cmp::Reverse;

/// Sort requirements by host count, largest first.
///
/// The sort is stable: requirements asking for the same number of hosts keep
/// their input order. Placing large blocks first keeps every later, smaller
/// block on a natural alignment boundary.
pub fn order_largest_first(requirements: Vec<HostRequirement>) -> Vec<HostRequirement> {
    requirements
        .into_iter()
        .sorted_by_key(|r| Reverse(r.hosts))
        .collect()
}
