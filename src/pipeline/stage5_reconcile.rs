use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::{Ctx, KindState, StructureKind};
use crate::pipeline::Stage;
use crate::reconcile::{Alignment, reconcile};

pub struct Stage5Reconcile;

impl Stage5Reconcile {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Reconcile {
    fn name(&self) -> &'static str {
        "stage5_reconcile"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for kind in StructureKind::ALL {
            let state = ctx.kind_mut(kind);
            match reconcile(&state.print_counts, &state.pbody_counts, &state.report_counts) {
                Ok(alignment) => {
                    ensure_streams_match(kind, state, &alignment)?;
                    info!(
                        kind = kind.label(),
                        images = alignment.images.len(),
                        structures = alignment.n_structures(),
                        "streams_aligned"
                    );
                    state.alignment = Some(alignment);
                }
                Err(mismatch) => {
                    warn!(
                        kind = kind.label(),
                        divergence = %mismatch.first,
                        "streams do not align; skipping metrics"
                    );
                    let message = format!("{} streams mismatch: {}", kind.label(), mismatch.first);
                    state.mismatch = Some(mismatch);
                    ctx.warnings.push(message);
                }
            }
        }
        Ok(())
    }
}

/// Equal per-image counts imply equal stream lengths; anything else is a bug
/// in one of the readers.
fn ensure_streams_match(kind: StructureKind, state: &KindState, alignment: &Alignment) -> Result<()> {
    let n = alignment.n_structures();
    let lens = [
        ("print files", state.files.prints.len()),
        ("spot blocks", state.blocks.len()),
        ("P-body sheets", state.tables.len()),
    ];
    for (name, len) in lens {
        if len != n {
            bail!(
                "{} {} ({}) do not match aligned structures ({})",
                kind.label(),
                name,
                len,
                n
            );
        }
    }
    Ok(())
}
