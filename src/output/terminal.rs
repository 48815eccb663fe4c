//! Terminal output with colors.

use crate::processing::TableRow;
use crate::VlsmResult;
use colored::Colorize;

const HEADERS: [&str; 8] = [
    "Name",
    "Hosts",
    "Size",
    "Network",
    "Mask",
    "Usable Range",
    "Broadcast",
    "Wasted",
];

fn row_cells(row: &TableRow) -> [String; 8] {
    [
        row.name.clone(),
        row.hosts_needed.to_string(),
        row.size.clone(),
        row.network.clone(),
        row.mask.clone(),
        row.usable_range.clone(),
        row.broadcast.clone(),
        row.wasted.to_string(),
    ]
}

/// Left-align cells to the column widths.
fn pad(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<String>>()
        .join("  ")
}

/// Render the allocation table, summary and free blocks for a terminal.
pub fn render_table(result: &VlsmResult) -> String {
    let cells: Vec<[String; 8]> = result.table.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = Vec::new();
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    out.push(pad(&header, &widths).bold().to_string());
    for (i, row) in cells.iter().enumerate() {
        let line = pad(row, &widths);
        // the totals row is always last
        if i + 1 == cells.len() {
            out.push(line.on_blue().to_string());
        } else {
            out.push(line);
        }
    }

    let report = &result.report;
    out.push(String::new());
    out.push(format!("Network:    {}", report.network.to_string().green()));
    out.push(format!("Available:  {}", report.total_available));
    out.push(format!("Allocated:  {}", report.total_allocated));
    out.push(format!("Wasted:     {}", report.total_wasted));
    out.push(format!("Remaining:  {}", report.addresses_remaining));
    out.push(format!("Efficiency: {}", report.efficiency_display()));

    if !result.unused.is_empty() {
        out.push(String::new());
        out.push("Unused networks:".bold().to_string());
        for block in &result.unused {
            out.push(format!("  {block} ({})", block.size()));
        }
    }

    out.join("\n")
}
