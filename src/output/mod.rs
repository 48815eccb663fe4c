//! Output formatting for calculation results.
//!
//! This module handles formatting a [`VlsmResult`]:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{quote_field, render_csv};
pub use terminal::render_table;

use crate::VlsmResult;

/// How a result is written to stdout.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Render `result` in the requested format.
pub fn render(result: &VlsmResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Csv => Ok(render_csv(result)),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate_vlsm_cidr, RequirementInput};

    #[test]
    fn test_render_json() {
        let reqs = vec![RequirementInput::new(Some("LAN"), 50)];
        let result = calculate_vlsm_cidr("192.168.1.0/24", &reqs).unwrap();
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["allocations"][0]["subnet"], "192.168.1.0/26");
        assert_eq!(value["allocations"][0]["name"], "LAN");
        assert_eq!(value["report"]["network"], "192.168.1.0/24");
        assert_eq!(value["report"]["addresses_remaining"], 192);
        assert_eq!(value["table"][1]["name"], "Total");
        assert_eq!(value["unused"][0], "192.168.1.64/26");
    }
}
