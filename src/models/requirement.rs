//! Host-count requirements as entered by the user and as seen by the allocator.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// A strictly positive number of hosts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HostCount(NonZeroU64);

impl HostCount {
    /// `None` for zero or negative input, which means "no requirement".
    pub fn new(hosts: i64) -> Option<HostCount> {
        u64::try_from(hosts)
            .ok()
            .and_then(NonZeroU64::new)
            .map(HostCount)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for HostCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One raw row of user input: an optional segment name and a host count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequirementInput {
    /// Segment name, blank or missing names get a positional default.
    #[serde(default)]
    pub name: Option<String>,
    /// Requested hosts; zero or negative drops the row.
    pub hosts: i64,
}

impl RequirementInput {
    pub fn new(name: Option<&str>, hosts: i64) -> Self {
        RequirementInput {
            name: name.map(str::to_string),
            hosts,
        }
    }
}

/// A named, validated requirement ready for allocation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostRequirement {
    pub name: String,
    pub hosts: HostCount,
}

/// Drop rows without a positive host count and fill in missing names.
///
/// Unnamed rows are called `Subnet N`, N being the 1-based position in `inputs`.
pub fn normalize_requirements(inputs: &[RequirementInput]) -> Vec<HostRequirement> {
    inputs
        .iter()
        .enumerate()
        .filter_map(|(i, input)| {
            let Some(hosts) = HostCount::new(input.hosts) else {
                log::debug!("Dropping requirement #{} with {} hosts", i + 1, input.hosts);
                return None;
            };
            let name = match input.name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => format!("Subnet {}", i + 1),
            };
            Some(HostRequirement { name, hosts })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_count_new() {
        assert_eq!(HostCount::new(0), None);
        assert_eq!(HostCount::new(-5), None);
        assert_eq!(HostCount::new(1).map(|h| h.get()), Some(1));
        assert_eq!(HostCount::new(i64::MAX).map(|h| h.get()), Some(i64::MAX as u64));
    }

    #[test]
    fn test_normalize_requirements() {
        let inputs = vec![
            RequirementInput::new(Some("Sales"), 100),
            RequirementInput::new(None, 0),
            RequirementInput::new(Some("  "), 20),
            RequirementInput::new(Some("Ops"), -3),
            RequirementInput::new(None, 2),
        ];
        let reqs = normalize_requirements(&inputs);
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Sales", "Subnet 3", "Subnet 5"]);
        let hosts: Vec<u64> = reqs.iter().map(|r| r.hosts.get()).collect();
        assert_eq!(hosts, vec![100, 20, 2]);
    }

    #[test]
    fn test_normalize_all_zero() {
        let inputs = vec![RequirementInput::new(None, 0), RequirementInput::new(None, 0)];
        assert!(normalize_requirements(&inputs).is_empty());
    }

    #[test]
    fn test_requirement_input_deserialize() {
        let input: RequirementInput = serde_json::from_str(r#"{"hosts": 12}"#).unwrap();
        assert_eq!(input, RequirementInput::new(None, 12));
    }
}
