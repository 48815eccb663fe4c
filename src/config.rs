//! Plan files, network selection and command-line requirement parsing.
//!
//! A plan file is JSON:
//! `{ "network": "10.0.0.0/22", "requirements": [{ "name": "LAN", "hosts": 100 }] }`

use crate::error::VlsmError;
use crate::models::{parse_ipv4, NetworkBlock, RequirementInput};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Errors reading a plan file or a requirement argument.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Error reading plan file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error parsing plan file at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Invalid requirement '{0}', expected [NAME=]HOSTS")]
    Requirement(String),
    #[error("No network given, pass NETWORK, --plan or set VLSM_NETWORK")]
    MissingNetwork,
    #[error("--prefix needs a bare NETWORK address, got '{0}'")]
    PrefixConflict(String),
    #[error("--prefix needs a NETWORK address on the command line")]
    PrefixWithoutNetwork,
    #[error(transparent)]
    Network(#[from] VlsmError),
}

/// Environment variable used when neither NETWORK nor a plan names the network.
pub const NETWORK_ENV: &str = "VLSM_NETWORK";

/// A saved calculation: the major network and its requirements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanFile {
    pub network: NetworkBlock,
    #[serde(default)]
    pub requirements: Vec<RequirementInput>,
}

/// Read a plan from a JSON file.
pub fn load_plan(path: &Path) -> Result<PlanFile, PlanError> {
    log::info!("Reading plan file: {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_plan(&json)
}

/// Parse plan JSON, reporting the path of the field that failed.
pub fn parse_plan(json: &str) -> Result<PlanFile, PlanError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        log::warn!("Plan parse failed at {path}");
        PlanError::Json {
            path,
            source: e.into_inner(),
        }
    })
}

/// Pick the major network.
///
/// NETWORK on the command line wins, then the plan file's network, then
/// `env_network`. `prefix` only applies to a bare NETWORK address.
pub fn resolve_network(
    network: Option<&str>,
    prefix: Option<u8>,
    plan_network: Option<NetworkBlock>,
    env_network: Option<&str>,
) -> Result<NetworkBlock, PlanError> {
    match (network, prefix) {
        (Some(cidr), Some(_)) if cidr.contains('/') => {
            Err(PlanError::PrefixConflict(cidr.to_string()))
        }
        (Some(addr), Some(prefix)) => Ok(NetworkBlock::new(parse_ipv4(addr)?, prefix)?),
        (Some(cidr), None) => Ok(NetworkBlock::parse(cidr)?),
        (None, Some(_)) => Err(PlanError::PrefixWithoutNetwork),
        (None, None) => {
            if let Some(block) = plan_network {
                return Ok(block);
            }
            match env_network.map(str::trim).filter(|s| !s.is_empty()) {
                Some(cidr) => {
                    log::info!("Using network {cidr} from {NETWORK_ENV}");
                    Ok(NetworkBlock::parse(cidr)?)
                }
                None => Err(PlanError::MissingNetwork),
            }
        }
    }
}

/// Regex for `[NAME=]HOSTS` requirement arguments.
static REQUIREMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_requirement_regex() -> &'static Regex {
    REQUIREMENT_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?:(?P<name>[^=]*)=)?\s*(?P<hosts>[+-]?\d+)\s*$").expect("Invalid Regex")
    })
}

/// Parse a `--hosts` argument such as `"Sales=100"` or `"100"`.
pub fn parse_requirement_arg(arg: &str) -> Result<RequirementInput, PlanError> {
    let caps = get_requirement_regex()
        .captures(arg)
        .ok_or_else(|| PlanError::Requirement(arg.to_string()))?;
    let hosts: i64 = caps["hosts"]
        .parse()
        .map_err(|_| PlanError::Requirement(arg.to_string()))?;
    let name = caps.name("name").map(|m| m.as_str().trim());
    Ok(RequirementInput::new(name, hosts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_requirement_arg() {
        assert_eq!(
            parse_requirement_arg("Sales=100").unwrap(),
            RequirementInput::new(Some("Sales"), 100)
        );
        assert_eq!(
            parse_requirement_arg("50").unwrap(),
            RequirementInput::new(None, 50)
        );
        assert_eq!(
            parse_requirement_arg("Guest Wifi = -4").unwrap(),
            RequirementInput::new(Some("Guest Wifi"), -4)
        );
        assert!(parse_requirement_arg("Sales=").is_err());
        assert!(parse_requirement_arg("lots").is_err());
        assert!(parse_requirement_arg("99999999999999999999").is_err());
    }

    fn block(cidr: &str) -> NetworkBlock {
        NetworkBlock::parse(cidr).unwrap()
    }

    #[test]
    fn test_resolve_network_plan_beats_env() {
        let plan = Some(block("10.0.0.0/22"));
        let network = resolve_network(None, None, plan, Some("192.168.1.0/24")).unwrap();
        assert_eq!(network, block("10.0.0.0/22"));
    }

    #[test]
    fn test_resolve_network_command_line_beats_plan() {
        let plan = Some(block("10.0.0.0/22"));
        let network = resolve_network(Some("172.16.0.0/20"), None, plan, Some("192.168.1.0/24"));
        assert_eq!(network.unwrap(), block("172.16.0.0/20"));

        let network = resolve_network(Some("172.16.0.0"), Some(20), plan, None);
        assert_eq!(network.unwrap(), block("172.16.0.0/20"));
    }

    #[test]
    fn test_resolve_network_env_fallback() {
        let network = resolve_network(None, None, None, Some(" 192.168.1.0/24 ")).unwrap();
        assert_eq!(network, block("192.168.1.0/24"));

        assert!(matches!(
            resolve_network(None, None, None, Some("")),
            Err(PlanError::MissingNetwork)
        ));
        assert!(matches!(
            resolve_network(None, None, None, None),
            Err(PlanError::MissingNetwork)
        ));
        assert!(matches!(
            resolve_network(None, None, None, Some("192.168.1.0")),
            Err(PlanError::Network(VlsmError::InvalidAddress(_)))
        ));
    }

    #[test]
    fn test_resolve_network_rejects_stray_prefix() {
        let plan = Some(block("10.0.0.0/22"));
        assert!(matches!(
            resolve_network(None, Some(24), plan, None),
            Err(PlanError::PrefixWithoutNetwork)
        ));
        assert!(matches!(
            resolve_network(None, Some(24), None, Some("192.168.1.0/24")),
            Err(PlanError::PrefixWithoutNetwork)
        ));
        assert!(matches!(
            resolve_network(Some("10.0.0.0/22"), Some(24), None, None),
            Err(PlanError::PrefixConflict(ref cidr)) if cidr == "10.0.0.0/22"
        ));
        assert!(matches!(
            resolve_network(Some("10.0.0.0"), Some(33), None, None),
            Err(PlanError::Network(VlsmError::InvalidPrefix(33)))
        ));
    }

    #[test]
    fn test_parse_plan() {
        let plan = parse_plan(
            r#"{"network": "10.0.0.0/22", "requirements": [{"name": "LAN", "hosts": 100}, {"hosts": 0}]}"#,
        )
        .unwrap();
        assert_eq!(plan.network.to_string(), "10.0.0.0/22");
        assert_eq!(plan.requirements.len(), 2);
        assert_eq!(plan.requirements[1], RequirementInput::new(None, 0));
    }

    #[test]
    fn test_parse_plan_error_path() {
        let err = parse_plan(r#"{"network": "10.0.0.0/22", "requirements": [{"hosts": "x"}]}"#)
            .unwrap_err();
        match err {
            PlanError::Json { path, .. } => assert_eq!(path, "requirements[0].hosts"),
            other => panic!("unexpected error {other}"),
        }

        let err = parse_plan(r#"{"network": "999.0.0.0/22"}"#).unwrap_err();
        assert!(matches!(err, PlanError::Json { ref path, .. } if path == "network"));
    }

    #[test]
    fn test_load_plan() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"network": "192.168.1.0/24", "requirements": [{{"name": "a", "hosts": 20}}]}}"#
        )
        .unwrap();
        let plan = load_plan(file.path()).unwrap();
        assert_eq!(plan.requirements, vec![RequirementInput::new(Some("a"), 20)]);

        let missing = load_plan(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(missing, PlanError::Io { .. }));
    }
}
