use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::StructureKind;
use crate::metrics::MetricRow;

pub fn header(kind: StructureKind) -> Vec<String> {
    let k = kind.label();
    vec![
        "Image Name".to_string(),
        format!("{} Number", k),
        format!("P-Body Area Percentage in {}", k),
        format!("Num P-Body per {} Area", k),
        format!("Number of mRNA per {} Area", k),
        "Num mRNA per P-Body Area".to_string(),
        "Fraction of mRNA in P-Bodies".to_string(),
    ]
}

pub fn write_results(path: &Path, kind: StructureKind, rows: &[MetricRow]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    w.write_record(header(kind))?;
    for row in rows {
        let mut record = Vec::with_capacity(7);
        record.push(row.image.clone());
        record.push(row.index.to_string());
        record.extend(row.outcome.values().iter().map(|v| v.to_string()));
        w.write_record(&record)?;
    }
    w.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
