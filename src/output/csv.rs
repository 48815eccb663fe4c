//! CSV output formatting for allocation tables.

use crate::processing::TableRow;
use crate::VlsmResult;

/// Render the allocation table, totals row included, as CSV.
pub fn render_csv(result: &VlsmResult) -> String {
    log::debug!("Rendering {} table rows as CSV", result.table.len());

    let mut lines = vec![
        r#""name","hosts_needed","size","network","mask","usable_range","broadcast","wasted""#
            .to_string(),
    ];
    lines.extend(result.table.iter().map(csv_row));
    lines.join("\n")
}

/// Quote a CSV field, doubling any embedded quotes.
pub fn quote_field<T: ToString>(value: T) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\"\""))
}

/// Format a single CSV row.
fn csv_row(row: &TableRow) -> String {
    [
        quote_field(&row.name),
        quote_field(row.hosts_needed),
        quote_field(&row.size),
        quote_field(&row.network),
        quote_field(&row.mask),
        quote_field(&row.usable_range),
        quote_field(&row.broadcast),
        quote_field(row.wasted),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate_vlsm, RequirementInput};

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field("test"), "\"test\"");
        assert_eq!(quote_field(42), "\"42\"");
        assert_eq!(quote_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_render_csv() {
        let reqs = vec![
            RequirementInput::new(Some("Lab, east"), 20),
            RequirementInput::new(Some("Office"), 50),
        ];
        let result = calculate_vlsm("10.1.0.0", 24, &reqs).unwrap();
        let csv = render_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(r#""name","hosts_needed""#));
        assert_eq!(
            lines[1],
            r#""Office","50","/26 (64)","10.1.0.0/26","255.255.255.192","10.1.0.1 – 10.1.0.62","10.1.0.63","12""#
        );
        assert!(lines[2].starts_with(r#""Lab, east","20","/27 (32)","10.1.0.64/27""#));
        assert_eq!(
            lines[3],
            r#""Total","70","96 allocated","","","160 remaining","","22""#
        );
    }
}
