use anyhow::Result;

use crate::config::SheetColumns;
use crate::report::StructureBlock;
use crate::sheets::PBodyTable;

/// Value written in place of a ratio that could not be computed.
pub const SENTINEL: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureMetrics {
    pub fraction_area: f64,
    pub density_pbody: f64,
    pub density_mrna: f64,
    /// `None` when the structure holds no P-body pixels.
    pub mrna_per_pbody_area: Option<f64>,
    /// `None` when the structure holds no mRNA spots.
    pub fraction_mrna_in_pbody: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricOutcome {
    Computed(StructureMetrics),
    /// The print mask has no foreground pixels.
    EmptyStructure,
}

impl MetricOutcome {
    /// The five output columns, with [`SENTINEL`] for anything not computed.
    pub fn values(&self) -> [f64; 5] {
        match self {
            Self::EmptyStructure => [SENTINEL; 5],
            Self::Computed(m) => [
                m.fraction_area,
                m.density_pbody,
                m.density_mrna,
                m.mrna_per_pbody_area.unwrap_or(SENTINEL),
                m.fraction_mrna_in_pbody.unwrap_or(SENTINEL),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub image: String,
    pub index: usize,
    pub outcome: MetricOutcome,
}

pub fn compute(
    structure_pixels: u64,
    pbodies: &PBodyTable,
    spots: &StructureBlock,
    columns: &SheetColumns,
) -> Result<MetricOutcome> {
    if structure_pixels == 0 {
        return Ok(MetricOutcome::EmptyStructure);
    }
    let pixels = structure_pixels as f64;
    let pbody_pixels = pbodies.column_sum(columns.area)?;
    let mrna_in_pbody = pbodies.column_sum(columns.mrna)?;
    let num_pbody = pbodies.n_pbodies() as f64;
    let num_mrna = spots.n_spots() as f64;

    Ok(MetricOutcome::Computed(StructureMetrics {
        fraction_area: pbody_pixels / pixels,
        density_pbody: num_pbody / pixels,
        density_mrna: num_mrna / pixels,
        mrna_per_pbody_area: ratio(mrna_in_pbody, pbody_pixels),
        fraction_mrna_in_pbody: ratio(mrna_in_pbody, num_mrna),
    }))
}

fn ratio(num: f64, denom: f64) -> Option<f64> {
    if denom == 0.0 { None } else { Some(num / denom) }
}
