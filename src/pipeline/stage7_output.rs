use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, StructureKind};
use crate::io::{csv_writer, json_writer};
use crate::pipeline::Stage;

pub struct Stage7Output;

impl Stage7Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Output {
    fn name(&self) -> &'static str {
        "stage7_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for kind in StructureKind::ALL {
            let state = ctx.kind(kind);
            if state.alignment.is_none() {
                continue;
            }
            let path = ctx.output.results(kind);
            csv_writer::write_results(&path, kind, &state.rows)?;
            info!(kind = kind.label(), path = %path.display(), "results_written");
        }

        if ctx.write_json {
            json_writer::write_json(&ctx.output.summary_path, ctx)?;
            info!(path = %ctx.output.summary_path.display(), "summary_written");
        }
        Ok(())
    }
}
