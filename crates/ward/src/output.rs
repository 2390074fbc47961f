//! Output formatting helpers for the `ward` CLI.
//!
//! Provides JSON output, table formatting, and human-readable bed display
//! in both row and detailed formats.

use std::io::{self, Write};

use serde::Serialize;

use ward_query::{BedHistoryView, BedRow, HistoryRow};
use ward_ui::styles::{render_muted, render_status};

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Each row is a `Vec<String>` with columns matching the headers.
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{:<width$}", header, width = widths[i]);
    }
    let _ = writeln!(handle);

    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{}", "-".repeat(*width));
    }
    let _ = writeln!(handle);

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                let _ = write!(handle, "  ");
            }
            if i < widths.len() {
                let _ = write!(handle, "{:<width$}", cell, width = widths[i]);
            } else {
                let _ = write!(handle, "{}", cell);
            }
        }
        let _ = writeln!(handle);
    }
}

/// Column headers for bed listings.
pub const BED_HEADERS: &[&str] = &["BED", "STATUS", "PATIENT", "ELAPSED"];

/// Format a bed as a row for [`output_table`].
pub fn format_bed_row(row: &BedRow) -> Vec<String> {
    vec![
        row.id.clone(),
        render_status(row.status),
        row.patient.clone().unwrap_or_default(),
        row.elapsed.clone().unwrap_or_default(),
    ]
}

/// Print a bed listing as a table.
pub fn print_bed_table(rows: &[BedRow]) {
    let table: Vec<Vec<String>> = rows.iter().map(format_bed_row).collect();
    output_table(BED_HEADERS, &table);
}

/// Format one transition as a human-readable line.
///
/// Format: `{timestamp}  {from} -> {to}` plus patient/dwell when present.
pub fn format_history_line(row: &HistoryRow) -> String {
    let mut line = format!(
        "{}  {} -> {}",
        row.at.format("%Y-%m-%d %H:%M"),
        row.from.as_str(),
        row.to.as_str(),
    );
    if let Some(ref patient) = row.patient {
        line.push_str(&format!("  {}", patient));
    }
    if let Some(ref dwell) = row.dwell {
        line.push_str(&format!("  ({})", dwell));
    }
    line
}

/// Print the transition log of one bed with a header line.
pub fn print_bed_history(view: &BedHistoryView) {
    println!(
        "Bed {} [{}]",
        view.id,
        render_status(view.status)
    );
    if view.history.is_empty() {
        println!("  {}", render_muted("no transitions recorded"));
        return;
    }
    for row in &view.history {
        println!("  {}", format_history_line(row));
    }
}

/// Format a bed in detailed multi-line view.
pub fn format_bed_detail(row: &BedRow) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Bed {}", row.id));
    lines.push(format!("Status: {}", render_status(row.status)));
    if let Some(ref patient) = row.patient {
        lines.push(format!("Patient: {}", patient));
    }
    if let Some(since) = row.occupied_since {
        lines.push(format!("Since: {}", since.format("%Y-%m-%d %H:%M")));
    }
    if let Some(ref elapsed) = row.elapsed {
        lines.push(format!("Elapsed: {}", elapsed));
    }
    lines.join("\n")
}
