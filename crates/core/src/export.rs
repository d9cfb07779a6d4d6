//! CSV assembly for the inventory export.
//!
//! Builds the export as a plain string. Fields are quoted per RFC 4180
//! rules when they contain a comma, quote, or newline, since item names
//! and notes are free text.

use crate::types::Timestamp;

/// Column order of the inventory export.
pub const INVENTORY_HEADER: [&str; 8] = [
    "id",
    "name",
    "category",
    "price",
    "quantity",
    "expiry_date",
    "notes",
    "created_at",
];

/// Quote a single CSV field if it needs quoting.
pub fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Join pre-formatted fields into one CSV record with trailing newline.
pub fn csv_row<S: AsRef<str>>(fields: &[S]) -> String {
    let mut row = fields
        .iter()
        .map(|f| csv_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Build a full CSV document: header row followed by `rows`.
pub fn build_csv<S: AsRef<str>>(header: &[&str], rows: &[Vec<S>]) -> String {
    let mut out = csv_row(header);
    for row in rows {
        out.push_str(&csv_row(row));
    }
    out
}

/// Attachment filename for an export taken at `now`.
pub fn export_filename(now: Timestamp) -> String {
    format!("grocery_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
