use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::ctx::StructureKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamNaming {
    /// Characters cut from the front of a print filename (`MAX_`).
    pub print_prefix_len: usize,
    /// Characters cut from the end of a print filename when the structure number
    /// is a single digit.
    pub print_suffix_len: usize,
    pub sheet_suffix_len: usize,
    pub report_suffix_len: usize,
    pub summary_sheet: String,
}

impl StreamNaming {
    pub fn dendrite() -> Self {
        Self {
            print_prefix_len: 4,
            print_suffix_len: 17,
            sheet_suffix_len: 35,
            report_suffix_len: 24,
            summary_sheet: "Dendrite_Averages.xlsx".to_string(),
        }
    }

    pub fn soma() -> Self {
        Self {
            print_prefix_len: 4,
            print_suffix_len: 21,
            sheet_suffix_len: 31,
            report_suffix_len: 24,
            summary_sheet: "Soma_Averages.xlsx".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    /// Print folder keywords, in match priority order.
    pub print: Vec<String>,
    /// Index into `print` holding dendrite prints.
    pub dendrite_print: usize,
    pub soma_print: usize,
    /// Indices into `print` that are only counted, never analysed.
    pub nucleus_print: usize,
    pub skeleton_print: usize,
    /// `[masks, workbooks]` in the P-body folders.
    pub pbody: Vec<String>,
    /// `[mRNA masks, total masks]`.
    pub pbody_masks: Vec<String>,
    /// Report files containing any of these are auxiliary.
    pub report_exclude: Vec<String>,
    pub report_extension: String,
}

impl Keywords {
    pub fn check(&self) -> Result<()> {
        let n = self.print.len();
        for (name, idx) in [
            ("dendrite_print", self.dendrite_print),
            ("soma_print", self.soma_print),
            ("nucleus_print", self.nucleus_print),
            ("skeleton_print", self.skeleton_print),
        ] {
            if idx >= n {
                bail!("{} index {} out of range for {} print keywords", name, idx, n);
            }
        }
        if self.pbody.len() != 2 {
            bail!(
                "expected 2 P-body keywords (masks, workbooks), got {}",
                self.pbody.len()
            );
        }
        if self.pbody_masks.len() != 2 {
            bail!(
                "expected 2 P-body mask keywords (mRNA, total), got {}",
                self.pbody_masks.len()
            );
        }
        Ok(())
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            print: vec![
                "_nucprint_".to_string(),
                "_print_".to_string(),
                "_skel_".to_string(),
                "_somaprint_".to_string(),
            ],
            dendrite_print: 1,
            soma_print: 3,
            nucleus_print: 0,
            skeleton_print: 2,
            pbody: vec![".gif".to_string(), ".xlsx".to_string()],
            pbody_masks: vec!["mRNA".to_string(), "740s_mask".to_string()],
            report_exclude: vec!["_FQ_".to_string(), "MATURE".to_string()],
            report_extension: ".txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetColumns {
    pub area: usize,
    pub mrna: usize,
}

impl Default for SheetColumns {
    fn default() -> Self {
        Self { area: 1, mrna: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dendrite: StreamNaming,
    pub soma: StreamNaming,
    pub keywords: Keywords,
    pub columns: SheetColumns,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dendrite: StreamNaming::dendrite(),
            soma: StreamNaming::soma(),
            keywords: Keywords::default(),
            columns: SheetColumns::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn naming(&self, kind: StructureKind) -> &StreamNaming {
        match kind {
            StructureKind::Dendrite => &self.dendrite,
            StructureKind::Soma => &self.soma,
        }
    }
}
