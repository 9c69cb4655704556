// src/file.rs

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::consts::EXPORT_SEP;
use crate::csv::write_row;
use crate::data::ResultSet;

/// Column order for the export: union of field names across all rows, in
/// first-seen order. Rows from failed lookups contribute only the listing
/// columns, so the metadata columns appear after them once any lookup hit.
pub fn header_union(rows: &ResultSet) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for name in row.names() {
            if !headers.iter().any(|h| h == name) {
                headers.push(s!(name));
            }
        }
    }
    headers
}

/// Serialize the whole result set to `path`. Creates parent directories,
/// overwrites any existing file. Missing fields become empty cells; there is
/// no index column. Output is a pure function of `rows`, so re-exporting the
/// same set is byte-identical.
pub fn export(rows: &ResultSet, path: &Path) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = header_union(rows);
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);

    write_row(&mut out, &headers, EXPORT_SEP)?;
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| s!(row.get(h).unwrap_or_default()))
            .collect();
        write_row(&mut out, &cells, EXPORT_SEP)?;
    }
    out.flush()?;

    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
