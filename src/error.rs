//! Error types for the VLSM engine.

/// Every way a VLSM calculation can be rejected.
///
/// All variants are ordinary outcomes of user input; the engine never panics on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VlsmError {
    #[error("Invalid IPv4 address '{0}'")]
    InvalidAddress(String),
    #[error("Invalid prefix length /{0}, expected 0-32")]
    InvalidPrefix(u32),
    #[error("No host requirements given")]
    NoRequirements,
    #[error("'{name}' needs {hosts} hosts (/{needed}) which does not fit in a /{available} network")]
    RequirementTooLarge {
        name: String,
        hosts: u64,
        /// Prefix the requirement would need, `None` if not even a /0 fits.
        needed: DisplayPrefix,
        available: u8,
    },
    #[error("Not enough address space left for '{name}' ({hosts} hosts, /{prefix}) in {network}")]
    CapacityExceeded {
        name: String,
        hosts: u64,
        prefix: u8,
        network: String,
    },
}

/// Prefix length shown in error messages; `-` when no prefix is large enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPrefix(pub Option<u8>);

impl std::fmt::Display for DisplayPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            Some(prefix) => write!(f, "{prefix}"),
            None => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VlsmError::InvalidAddress("1.2.3".to_string()).to_string(),
            "Invalid IPv4 address '1.2.3'"
        );
        let err = VlsmError::RequirementTooLarge {
            name: "LAN".to_string(),
            hosts: 300,
            needed: DisplayPrefix(Some(23)),
            available: 24,
        };
        assert_eq!(
            err.to_string(),
            "'LAN' needs 300 hosts (/23) which does not fit in a /24 network"
        );
        assert_eq!(DisplayPrefix(None).to_string(), "-");
    }
}
