// src/specs/posting.rs
//
// Job-detail page → table rows → header names / values.
//
// The detail page is a key/value table: typically each `<tr>` holds one `<th>`
// label and one `<td>` value. Rows are collected from the whole document, not
// one table, so layout tables around the posting are picked up too.

use scraper::{ElementRef, Html};

use crate::config::options::CellMode;
use crate::core::html::{element_text, selector};
use crate::error::{Result, ScrapeError};

/// One `<tr>`: its own `<th>` and `<td>` texts, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    pub headers: Vec<String>,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn is_header_row(&self) -> bool { !self.headers.is_empty() }
    pub fn is_data_row(&self) -> bool { !self.cells.is_empty() }
}

/// Every `<tr>` in the document. Cells of nested tables belong to their own rows.
pub fn parse_rows(html: &str, raw_text: bool) -> Result<Vec<TableRow>> {
    let doc = Html::parse_document(html);
    let tr_sel = selector("tr")?;

    let rows = doc
        .select(&tr_sel)
        .map(|tr| {
            let mut row = TableRow::default();
            for cell in tr.children().filter_map(ElementRef::wrap) {
                match cell.value().name() {
                    "th" => row.headers.push(element_text(cell, raw_text)),
                    "td" => row.cells.push(element_text(cell, raw_text)),
                    _ => {}
                }
            }
            row
        })
        .collect();
    Ok(rows)
}

/// Column names, one source row at a time.
pub fn extract_headers(rows: &[TableRow], mode: CellMode) -> Result<Vec<String>> {
    collect_cells(rows, mode, "header cell (th)", |r| &r.headers)
}

/// Values for one job record.
pub fn extract_row(rows: &[TableRow], mode: CellMode) -> Result<Vec<String>> {
    collect_cells(rows, mode, "data cell (td)", |r| &r.cells)
}

fn collect_cells(
    rows: &[TableRow],
    mode: CellMode,
    what: &'static str,
    pick: impl Fn(&TableRow) -> &Vec<String>,
) -> Result<Vec<String>> {
    match mode {
        CellMode::AllCells => Ok(rows.iter().flat_map(|r| pick(r).iter().cloned()).collect()),
        CellMode::FirstCell => rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                pick(r).first().cloned().ok_or_else(|| ScrapeError::MissingElement {
                    what,
                    context: format!("table row {i}"),
                })
            })
            .collect(),
    }
}

/// Short rows get exactly one `pad` value appended; nothing is aligned.
pub fn pad_row(row: &mut Vec<String>, min_columns: usize, pad: &str) {
    if row.len() < min_columns {
        row.push(s!(pad));
    }
}
