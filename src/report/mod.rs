//! FISH-QUANT style spot reports.
//!
//! One report covers a whole image and lists every outlined structure in turn.
//! Each structure's spots sit between a `Pos_Y` column header and a `SPOTS_END`
//! marker; a structure without spots has no data section at all, which is only
//! visible as an end-of-outline marker followed directly by the next
//! `CELL_START` (or by the end of the file).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::counts::{ImageIdStrategy, ImageStructureCount};

pub const DATA_HEADER: &str = "Pos_Y";
pub const STRUCTURE_START: &str = "CELL_START";
pub const SPOTS_END: &str = "SPOTS_END";
/// Dendrite reports close outlines with `CELL_END`, soma reports with `Nucleus_END`.
pub const STRUCTURE_END: [&str; 2] = ["CELL_END", "Nucleus_END"];

/// Spots detected inside one structure; each row holds the report's numeric columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureBlock {
    pub rows: Vec<Vec<f64>>,
}

impl StructureBlock {
    pub fn n_spots(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Seeking,
    Reading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub blocks: Vec<StructureBlock>,
}

impl ParsedReport {
    pub fn n_structures(&self) -> usize {
        self.blocks.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedReports {
    pub blocks: Vec<StructureBlock>,
    pub counts: Vec<ImageStructureCount>,
}

struct BlockSplitter {
    state: ParserState,
    pending_empty: bool,
    acc: Vec<Vec<f64>>,
    blocks: Vec<StructureBlock>,
}

impl BlockSplitter {
    fn new() -> Self {
        Self {
            state: ParserState::Seeking,
            pending_empty: false,
            acc: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        let token = line.split('\t').next().unwrap_or("");

        if std::mem::take(&mut self.pending_empty) && token == STRUCTURE_START {
            self.blocks.push(StructureBlock::default());
        }

        match self.state {
            ParserState::Seeking => {
                if token == DATA_HEADER {
                    self.state = ParserState::Reading;
                } else if STRUCTURE_END.contains(&token) {
                    self.pending_empty = true;
                }
            }
            ParserState::Reading => {
                if token == SPOTS_END {
                    self.blocks.push(StructureBlock {
                        rows: std::mem::take(&mut self.acc),
                    });
                    self.state = ParserState::Seeking;
                } else if !line.is_empty() {
                    self.acc.push(parse_row(line)?);
                }
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<StructureBlock> {
        if self.pending_empty {
            self.blocks.push(StructureBlock::default());
        }
        if self.state == ParserState::Reading {
            warn!(
                rows = self.acc.len(),
                "report ended inside a spot table; trailing rows dropped"
            );
        }
        self.blocks
    }
}

fn parse_row(line: &str) -> Result<Vec<f64>> {
    line.split('\t')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("non-numeric spot field '{}'", field))
        })
        .collect()
}

pub fn split_report(content: &str) -> Result<ParsedReport> {
    let mut splitter = BlockSplitter::new();
    for (idx, line) in content.lines().enumerate() {
        splitter
            .feed(line)
            .with_context(|| format!("line {}", idx + 1))?;
    }
    Ok(ParsedReport {
        blocks: splitter.finish(),
    })
}

pub fn is_report(file_name: &str, extension: &str) -> bool {
    file_name.ends_with(extension)
}

pub fn read_report(folder: &Path, file_name: &str) -> Result<ParsedReport> {
    let path = folder.join(file_name);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    split_report(&content).with_context(|| format!("malformed report {}", path.display()))
}

/// Parse every report in `files` (in order). Files without the report extension
/// contribute nothing.
pub fn split_reports(
    folder: &Path,
    files: &[String],
    extension: &str,
    strategy: ImageIdStrategy,
    threads: usize,
) -> Result<ParsedReports> {
    let reports: Vec<&String> = files
        .iter()
        .filter(|f| {
            let keep = is_report(f, extension);
            if !keep {
                debug!(file = %f, "skipping non-report file");
            }
            keep
        })
        .collect();

    let parsed = parse_all(folder, &reports, threads)?;

    let mut out = ParsedReports::default();
    let mut per_file = Vec::with_capacity(reports.len());
    for (file, report) in reports.iter().zip(parsed) {
        let image = strategy.image_id(file)?;
        debug!(file = %file, image = %image, structures = report.n_structures(), "report_parsed");
        per_file.push((image, report.n_structures()));
        out.blocks.extend(report.blocks);
    }
    out.counts = crate::counts::group_consecutive(per_file);
    Ok(out)
}

#[cfg(feature = "mt")]
fn parse_all(folder: &Path, files: &[&String], threads: usize) -> Result<Vec<ParsedReport>> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
    pool.install(|| {
        files
            .par_iter()
            .map(|f| read_report(folder, f))
            .collect::<Result<Vec<_>>>()
    })
}

#[cfg(not(feature = "mt"))]
fn parse_all(folder: &Path, files: &[&String], threads: usize) -> Result<Vec<ParsedReport>> {
    let _ = threads;
    files.iter().map(|f| read_report(folder, f)).collect()
}

/// Reject a report set where blocks and counts disagree.
pub fn ensure_consistent(parsed: &ParsedReports) -> Result<()> {
    let counted = crate::counts::total(&parsed.counts);
    if counted != parsed.blocks.len() {
        bail!(
            "report blocks ({}) do not match counted structures ({})",
            parsed.blocks.len(),
            counted
        );
    }
    Ok(())
}
