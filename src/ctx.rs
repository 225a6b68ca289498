use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::counts::ImageStructureCount;
use crate::metrics::MetricRow;
use crate::reconcile::{Alignment, Mismatch};
use crate::report::StructureBlock;
use crate::sheets::PBodyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    Dendrite,
    Soma,
}

impl StructureKind {
    pub const ALL: [StructureKind; 2] = [StructureKind::Dendrite, StructureKind::Soma];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dendrite => "Dendrite",
            Self::Soma => "Soma",
        }
    }

    pub fn results_file(&self) -> &'static str {
        match self {
            Self::Dendrite => "Dendrite_Results.csv",
            Self::Soma => "Soma_Results.csv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputDirs {
    pub prints: PathBuf,
    pub pbody_dendrite: PathBuf,
    pub pbody_soma: PathBuf,
    pub mrna_dendrite: PathBuf,
    pub mrna_soma: PathBuf,
}

impl InputDirs {
    pub fn pbody(&self, kind: StructureKind) -> &PathBuf {
        match kind {
            StructureKind::Dendrite => &self.pbody_dendrite,
            StructureKind::Soma => &self.pbody_soma,
        }
    }

    pub fn mrna(&self, kind: StructureKind) -> &PathBuf {
        match kind {
            StructureKind::Dendrite => &self.mrna_dendrite,
            StructureKind::Soma => &self.mrna_soma,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredFiles {
    pub nucleus_prints: usize,
    pub skeletons: usize,
    pub other_prints: usize,
    pub mrna_masks: usize,
    pub total_masks: usize,
    pub split_masks: usize,
    pub other_pbody: usize,
}

#[derive(Debug, Clone, Default)]
pub struct StreamFiles {
    pub prints: Vec<String>,
    pub workbooks: Vec<String>,
    pub reports: Vec<String>,
}

#[derive(Debug, Default)]
pub struct KindState {
    pub files: StreamFiles,
    pub blocks: Vec<StructureBlock>,
    pub tables: Vec<PBodyTable>,
    pub print_counts: Vec<ImageStructureCount>,
    pub pbody_counts: Vec<ImageStructureCount>,
    pub report_counts: Vec<ImageStructureCount>,
    pub alignment: Option<Alignment>,
    pub mismatch: Option<Box<Mismatch>>,
    pub rows: Vec<MetricRow>,
    pub ignored: IgnoredFiles,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub summary_path: PathBuf,
}

impl OutputPaths {
    pub fn results(&self, kind: StructureKind) -> PathBuf {
        self.out_dir.join(kind.results_file())
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub inputs: InputDirs,
    pub config: Config,
    pub threads: usize,
    pub write_json: bool,
    pub dendrite: KindState,
    pub soma: KindState,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(inputs: InputDirs, out_dir: PathBuf, config: Config, write_json: bool) -> Self {
        let summary_path = out_dir.join("summary.json");
        Self {
            inputs,
            config,
            threads: 0,
            write_json,
            dendrite: KindState::default(),
            soma: KindState::default(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                summary_path,
            },
        }
    }

    pub fn kind(&self, kind: StructureKind) -> &KindState {
        match kind {
            StructureKind::Dendrite => &self.dendrite,
            StructureKind::Soma => &self.soma,
        }
    }

    pub fn kind_mut(&mut self, kind: StructureKind) -> &mut KindState {
        match kind {
            StructureKind::Dendrite => &mut self.dendrite,
            StructureKind::Soma => &mut self.soma,
        }
    }

    pub fn mismatched_kinds(&self) -> Vec<StructureKind> {
        StructureKind::ALL
            .into_iter()
            .filter(|k| self.kind(*k).mismatch.is_some())
            .collect()
    }
}
