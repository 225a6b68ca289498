use anyhow::Result;
use tracing::info;

use crate::counts::ImageIdStrategy;
use crate::ctx::{Ctx, StructureKind};
use crate::pipeline::Stage;
use crate::report;

pub struct Stage2Reports;

impl Stage2Reports {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Reports {
    fn name(&self) -> &'static str {
        "stage2_reports"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for kind in StructureKind::ALL {
            let strategy = ImageIdStrategy::report(ctx.config.naming(kind));
            let parsed = report::split_reports(
                ctx.inputs.mrna(kind),
                &ctx.kind(kind).files.reports,
                &ctx.config.keywords.report_extension,
                strategy,
                ctx.threads,
            )?;
            report::ensure_consistent(&parsed)?;

            info!(
                kind = kind.label(),
                images = parsed.counts.len(),
                structures = parsed.blocks.len(),
                "reports_split"
            );
            let state = ctx.kind_mut(kind);
            state.blocks = parsed.blocks;
            state.report_counts = parsed.counts;
        }
        Ok(())
    }
}
