use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_discover;
pub mod stage2_reports;
pub mod stage3_sheets;
pub mod stage4_prints;
pub mod stage5_reconcile;
pub mod stage6_metrics;
pub mod stage7_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Everything up to and including reconciliation.
    pub fn validate() -> Self {
        Self::new(vec![
            Box::new(stage1_discover::Stage1Discover::new()),
            Box::new(stage2_reports::Stage2Reports::new()),
            Box::new(stage3_sheets::Stage3Sheets::new()),
            Box::new(stage4_prints::Stage4Prints::new()),
            Box::new(stage5_reconcile::Stage5Reconcile::new()),
        ])
    }

    pub fn full() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_discover::Stage1Discover::new()),
            Box::new(stage2_reports::Stage2Reports::new()),
            Box::new(stage3_sheets::Stage3Sheets::new()),
            Box::new(stage4_prints::Stage4Prints::new()),
            Box::new(stage5_reconcile::Stage5Reconcile::new()),
            Box::new(stage6_metrics::Stage6Metrics::new()),
            Box::new(stage7_output::Stage7Output::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
