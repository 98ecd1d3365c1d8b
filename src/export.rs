// src/export.rs
use std::io::Write;

use csv::WriterBuilder;

use crate::config::options::ExportOptions;
use crate::error::Result;
use crate::table::ResultTable;

/// Write the table as delimited text.
///
/// With `include_index`, the header record starts with an empty cell and each
/// data record starts with its 0-based position.
pub fn write_table<W: Write>(w: W, table: &ResultTable, export: &ExportOptions) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(export.format.delim())
        .flexible(true)
        .from_writer(w);

    if export.include_index {
        out.write_record(std::iter::once("").chain(table.headers.iter().map(String::as_str)))?;
        for (i, row) in table.rows.iter().enumerate() {
            let idx = i.to_string();
            out.write_record(std::iter::once(idx.as_str()).chain(row.iter().map(String::as_str)))?;
        }
    } else {
        out.write_record(&table.headers)?;
        for row in &table.rows {
            out.write_record(row)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Render the whole export to a string (used for previews and tests).
pub fn to_export_string(table: &ResultTable, export: &ExportOptions) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table, export)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
