use anyhow::Result;
use tracing::info;

use crate::counts::{self, ImageIdStrategy};
use crate::ctx::{Ctx, StructureKind};
use crate::pipeline::Stage;

pub struct Stage4Prints;

impl Stage4Prints {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Prints {
    fn name(&self) -> &'static str {
        "stage4_prints"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for kind in StructureKind::ALL {
            let strategy = ImageIdStrategy::print(ctx.config.naming(kind));
            let print_counts = counts::count_prints(&ctx.kind(kind).files.prints, strategy)?;
            info!(
                kind = kind.label(),
                images = print_counts.len(),
                "prints_counted"
            );
            ctx.kind_mut(kind).print_counts = print_counts;
        }
        Ok(())
    }
}
