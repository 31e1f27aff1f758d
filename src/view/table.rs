//! Plain-text table of the visible page.

use crate::model::Record;
use crate::state::ViewSnapshot;
use std::fmt::Write;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Avatar"];

/// Shown in place of rows when the visible page is empty.
pub const EMPTY_MESSAGE: &str = "No users found.";

fn row(record: &Record) -> [String; 4] {
    [
        record.id.to_string(),
        record.full_name().trim().to_string(),
        record.email.clone().unwrap_or_default(),
        record.avatar.clone(),
    ]
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render the visible records followed by the pager and status lines.
pub fn render_table(snapshot: &ViewSnapshot) -> String {
    let rows: Vec<[String; 4]> = snapshot.visible_records.iter().map(row).collect();
    let header = HEADERS.map(str::to_string);

    let mut widths = [0usize; 4];
    for cells in std::iter::once(&header).chain(&rows) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for cells in &rows {
        push_row(&mut out, cells, &widths);
    }

    // Writing to a String cannot fail
    let _ = writeln!(out, "Page {} / {}", snapshot.page_index, snapshot.page_count);
    let _ = writeln!(out, "Loaded: {} users", snapshot.total_loaded_count);
    if snapshot.is_loading {
        out.push_str("Loading...\n");
    }
    if let Some(message) = &snapshot.last_error_message {
        let _ = writeln!(out, "Error: {message}");
    }
    out
}
