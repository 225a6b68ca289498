use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::counts::{ImageIdStrategy, ImageStructureCount, group_consecutive};

#[derive(Debug, Clone, PartialEq)]
pub struct PBodyTable {
    pub sheet: String,
    pub header: Vec<String>,
    /// Non-numeric cells are NaN.
    pub rows: Vec<Vec<f64>>,
}

impl PBodyTable {
    pub fn n_pbodies(&self) -> usize {
        self.rows.len()
    }

    /// Sum of a column with every cell truncated toward zero.
    pub fn column_sum(&self, col: usize) -> Result<f64> {
        let mut sum = 0.0;
        for (idx, row) in self.rows.iter().enumerate() {
            let Some(v) = row.get(col).copied() else {
                bail!(
                    "sheet '{}' row {} has no column {}",
                    self.sheet,
                    idx + 2,
                    col
                );
            };
            if !v.is_finite() {
                bail!(
                    "sheet '{}' row {} column {} is not numeric",
                    self.sheet,
                    idx + 2,
                    col
                );
            }
            sum += v.trunc();
        }
        Ok(sum)
    }
}

fn cell_value(cell: &Data) -> f64 {
    match cell {
        Data::Int(v) => *v as f64,
        Data::Float(v) => *v,
        Data::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Data::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

pub fn read_workbook(folder: &Path, file_name: &str) -> Result<Vec<PBodyTable>> {
    let path = folder.join(file_name);
    let mut workbook = open_workbook_auto(&path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;

    let mut tables = Vec::new();
    for sheet in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet)
            .with_context(|| format!("failed to read sheet '{}' of {}", sheet, path.display()))?;

        // Ranges start at the first used cell; column indices count from A.
        let skipped = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let mut rows = range
            .rows()
            .filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)));
        let header: Vec<String> = rows
            .next()
            .map(|r| {
                std::iter::repeat_n(String::new(), skipped)
                    .chain(r.iter().map(cell_text))
                    .collect()
            })
            .unwrap_or_default();
        let rows: Vec<Vec<f64>> = rows
            .map(|r| {
                std::iter::repeat_n(f64::NAN, skipped)
                    .chain(r.iter().map(cell_value))
                    .collect()
            })
            .collect();

        debug!(workbook = %file_name, sheet = %sheet, pbodies = rows.len(), "sheet_read");
        tables.push(PBodyTable {
            sheet,
            header,
            rows,
        });
    }
    Ok(tables)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedWorkbooks {
    pub tables: Vec<PBodyTable>,
    pub counts: Vec<ImageStructureCount>,
}

/// Read every workbook in order; each sheet counts one structure of the
/// workbook's image.
pub fn read_workbooks(
    folder: &Path,
    files: &[String],
    strategy: ImageIdStrategy,
    threads: usize,
) -> Result<ParsedWorkbooks> {
    let books = read_all(folder, files, threads)?;
    let mut out = ParsedWorkbooks::default();
    let mut per_file = Vec::with_capacity(files.len());
    for (file, tables) in files.iter().zip(books) {
        per_file.push((strategy.image_id(file)?, tables.len()));
        out.tables.extend(tables);
    }
    out.counts = group_consecutive(per_file);
    Ok(out)
}

#[cfg(feature = "mt")]
fn read_all(folder: &Path, files: &[String], threads: usize) -> Result<Vec<Vec<PBodyTable>>> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
    pool.install(|| {
        files
            .par_iter()
            .map(|f| read_workbook(folder, f))
            .collect::<Result<Vec<_>>>()
    })
}

#[cfg(not(feature = "mt"))]
fn read_all(folder: &Path, files: &[String], threads: usize) -> Result<Vec<Vec<PBodyTable>>> {
    let _ = threads;
    files.iter().map(|f| read_workbook(folder, f)).collect()
}
