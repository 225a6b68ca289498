use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::{Ctx, StructureKind};
use crate::metrics::MetricOutcome;
use crate::schema::v1::{KindStatus, KindSummary, PbodyQcV1, StreamSequences, ToolMeta};

pub fn build_report(ctx: &Ctx) -> PbodyQcV1 {
    let kinds = StructureKind::ALL
        .into_iter()
        .map(|kind| kind_summary(ctx, kind))
        .collect();
    PbodyQcV1 {
        tool: ToolMeta {
            name: "kira-pbodyqc".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            schema: "v1".to_string(),
        },
        kinds,
        warnings: ctx.warnings.clone(),
    }
}

fn kind_summary(ctx: &Ctx, kind: StructureKind) -> KindSummary {
    let state = ctx.kind(kind);
    let empty_structures = state
        .rows
        .iter()
        .filter(|r| matches!(r.outcome, MetricOutcome::EmptyStructure))
        .count();

    if let Some(m) = &state.mismatch {
        return KindSummary {
            kind,
            status: KindStatus::Mismatch,
            images: 0,
            structures: 0,
            empty_structures,
            results_file: None,
            divergence: Some(m.first.to_string()),
            sequences: Some(StreamSequences {
                prints: m.prints.clone(),
                pbody: m.pbody.clone(),
                reports: m.reports.clone(),
            }),
            ignored: state.ignored.clone(),
        };
    }

    let (images, structures) = state
        .alignment
        .as_ref()
        .map(|a| (a.images.len(), a.n_structures()))
        .unwrap_or((0, 0));
    let status = if images == 0 {
        KindStatus::Empty
    } else {
        KindStatus::Ok
    };
    KindSummary {
        kind,
        status,
        images,
        structures,
        empty_structures,
        results_file: state
            .alignment
            .as_ref()
            .map(|_| kind.results_file().to_string()),
        divergence: None,
        sequences: None,
        ignored: state.ignored.clone(),
    }
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx);
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
