use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::ctx::{Ctx, StructureKind};
use crate::io::prints;
use crate::metrics::{self, MetricOutcome, MetricRow};
use crate::pipeline::Stage;

pub struct Stage6Metrics;

impl Stage6Metrics {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Metrics {
    fn name(&self) -> &'static str {
        "stage6_metrics"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for kind in StructureKind::ALL {
            let rows = compute_rows(ctx, kind)?;
            let empty = rows
                .iter()
                .filter(|r| matches!(r.outcome, MetricOutcome::EmptyStructure))
                .count();
            if empty > 0 {
                ctx.warnings.push(format!(
                    "{} {} structure(s) have an empty print mask",
                    empty,
                    kind.label().to_lowercase()
                ));
            }
            info!(kind = kind.label(), rows = rows.len(), empty, "metrics_computed");
            ctx.kind_mut(kind).rows = rows;
        }
        Ok(())
    }
}

fn compute_rows(ctx: &Ctx, kind: StructureKind) -> Result<Vec<MetricRow>> {
    let state = ctx.kind(kind);
    let Some(alignment) = &state.alignment else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::with_capacity(alignment.n_structures());
    let structures = alignment
        .structure_images()
        .zip(&state.files.prints)
        .zip(&state.tables)
        .zip(&state.blocks);
    for (i, (((image, print), table), block)) in structures.enumerate() {
        let pixels = prints::print_area(&ctx.inputs.prints, print)?;
        let outcome = metrics::compute(pixels, table, block, &ctx.config.columns)
            .with_context(|| format!("{} structure {} ({})", kind.label(), i + 1, print))?;
        debug!(image, print = %print, pixels, "structure_measured");
        rows.push(MetricRow {
            image: image.to_string(),
            index: i + 1,
            outcome,
        });
    }
    Ok(rows)
}
