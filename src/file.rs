// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::config::options::ExportOptions;
use crate::error::{Result, ScrapeError};
use crate::export::write_table;
use crate::table::ResultTable;

/// Write the table to the path implied by `export`. Returns the final path.
pub fn write_export(table: &ResultTable, export: &ExportOptions) -> Result<PathBuf> {
    let path = resolve_out_path(export.out_path.as_deref(), export.format.ext())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, export)?;
    out.flush()?;
    Ok(path)
}

/// No path, or a directory (existing, or written with a trailing separator),
/// gets the default file name with the extension of the chosen format.
/// A named file is used as given.
pub fn resolve_out_path(user_o: Option<&Path>, ext: &str) -> Result<PathBuf> {
    let raw = user_o.map(|p| p.to_string_lossy()).unwrap_or_default();
    if raw.is_empty() {
        return Ok(default_file_name(ext));
    }
    let p = PathBuf::from(normalize_separators(&raw));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_file_name(ext)))
    } else {
        Ok(p)
    }
}

fn default_file_name(ext: &str) -> PathBuf {
    PathBuf::from(DEFAULT_OUT_FILE).with_extension(ext)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
