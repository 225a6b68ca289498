use anyhow::Result;
use tracing::{debug, info};

use crate::classify::{self, classify};
use crate::config::Config;
use crate::ctx::{Ctx, IgnoredFiles, StructureKind};
use crate::io::list_files;
use crate::pipeline::Stage;

pub struct Stage1Discover;

impl Stage1Discover {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Discover {
    fn name(&self) -> &'static str {
        "stage1_discover"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let kw = &ctx.config.keywords;
        kw.check()?;
        let prints = list_files(&ctx.inputs.prints)?;
        let mut print_buckets = classify(&prints, &kw.print);
        let nucleus_prints = print_buckets.matched(kw.nucleus_print).len();
        let skeletons = print_buckets.matched(kw.skeleton_print).len();
        let other_prints = print_buckets.unmatched().len();
        let dendrite_prints = print_buckets.take_matched(kw.dendrite_print);
        let soma_prints = print_buckets.take_matched(kw.soma_print);

        for kind in StructureKind::ALL {
            let pbody_dir = ctx.inputs.pbody(kind).clone();
            let mrna_dir = ctx.inputs.mrna(kind).clone();
            let (workbooks, mut ignored) = discover_pbody(&ctx.config, kind, &pbody_dir)?;
            let reports = discover_reports(&ctx.config, &mrna_dir)?;
            ignored.nucleus_prints = nucleus_prints;
            ignored.skeletons = skeletons;
            ignored.other_prints = other_prints;

            let state = ctx.kind_mut(kind);
            state.files.prints = match kind {
                StructureKind::Dendrite => dendrite_prints.clone(),
                StructureKind::Soma => soma_prints.clone(),
            };
            state.files.workbooks = workbooks;
            state.files.reports = reports;
            state.ignored = ignored;

            info!(
                kind = kind.label(),
                prints = state.files.prints.len(),
                workbooks = state.files.workbooks.len(),
                reports = state.files.reports.len(),
                "files_discovered"
            );
        }
        Ok(())
    }
}

/// Masks are classified and only counted.
pub fn discover_pbody(
    config: &Config,
    kind: StructureKind,
    dir: &std::path::Path,
) -> Result<(Vec<String>, IgnoredFiles)> {
    let summary = &config.naming(kind).summary_sheet;
    let files: Vec<String> = list_files(dir)?
        .into_iter()
        .filter(|f| f != summary)
        .collect();

    let kw = &config.keywords;
    kw.check()?;
    let mut buckets = classify(&files, &kw.pbody);
    let masks = buckets.take_matched(0);
    let workbooks = buckets.take_matched(1);
    let mask_buckets = classify(&masks, &kw.pbody_masks);

    let ignored = IgnoredFiles {
        mrna_masks: mask_buckets.matched(0).len(),
        total_masks: mask_buckets.matched(1).len(),
        split_masks: mask_buckets.unmatched().len(),
        other_pbody: buckets.unmatched().len(),
        ..IgnoredFiles::default()
    };
    debug!(kind = kind.label(), ?ignored, "pbody_folder_classified");
    Ok((workbooks, ignored))
}

pub fn discover_reports(config: &Config, dir: &std::path::Path) -> Result<Vec<String>> {
    let exclude = &config.keywords.report_exclude;
    let mut files: Vec<String> = list_files(dir)?
        .into_iter()
        .filter(|f| !exclude.iter().any(|x| f.contains(x.as_str())))
        .collect();
    classify::natural_sort(&mut files);
    Ok(files)
}
