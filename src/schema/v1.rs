use serde::{Deserialize, Serialize};

use crate::counts::ImageStructureCount;
use crate::ctx::{IgnoredFiles, StructureKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub schema: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindStatus {
    Ok,
    Mismatch,
    /// All three streams were empty.
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSequences {
    pub prints: Vec<ImageStructureCount>,
    pub pbody: Vec<ImageStructureCount>,
    pub reports: Vec<ImageStructureCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindSummary {
    pub kind: StructureKind,
    pub status: KindStatus,
    pub images: usize,
    pub structures: usize,
    pub empty_structures: usize,
    pub results_file: Option<String>,
    pub divergence: Option<String>,
    pub sequences: Option<StreamSequences>,
    pub ignored: IgnoredFiles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PbodyQcV1 {
    pub tool: ToolMeta,
    pub kinds: Vec<KindSummary>,
    pub warnings: Vec<String>,
}
