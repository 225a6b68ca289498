use anyhow::Result;
use tracing::info;

use crate::counts::ImageIdStrategy;
use crate::ctx::{Ctx, StructureKind};
use crate::pipeline::Stage;
use crate::sheets;

pub struct Stage3Sheets;

impl Stage3Sheets {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Sheets {
    fn name(&self) -> &'static str {
        "stage3_sheets"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for kind in StructureKind::ALL {
            let strategy = ImageIdStrategy::sheet(ctx.config.naming(kind));
            let parsed = sheets::read_workbooks(
                ctx.inputs.pbody(kind),
                &ctx.kind(kind).files.workbooks,
                strategy,
                ctx.threads,
            )?;

            info!(
                kind = kind.label(),
                images = parsed.counts.len(),
                sheets = parsed.tables.len(),
                "workbooks_read"
            );
            let state = ctx.kind_mut(kind);
            state.tables = parsed.tables;
            state.pbody_counts = parsed.counts;
        }
        Ok(())
    }
}
