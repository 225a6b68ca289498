use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::StreamNaming;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStructureCount {
    pub image: String,
    pub count: usize,
}

impl ImageStructureCount {
    pub fn new(image: impl Into<String>, count: usize) -> Self {
        Self {
            image: image.into(),
            count,
        }
    }
}

impl fmt::Display for ImageStructureCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}', {}]", self.image, self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageIdStrategy {
    StripSuffix { suffix_len: usize },
    /// Drop a fixed prefix plus a suffix that grows with the digit count of the
    /// trailing structure number (`..._7.tif`, `..._12.tif`).
    StructureNumbered { prefix_len: usize, suffix_len: usize },
}

impl ImageIdStrategy {
    pub fn sheet(naming: &StreamNaming) -> Self {
        Self::StripSuffix {
            suffix_len: naming.sheet_suffix_len,
        }
    }

    pub fn report(naming: &StreamNaming) -> Self {
        Self::StripSuffix {
            suffix_len: naming.report_suffix_len,
        }
    }

    pub fn print(naming: &StreamNaming) -> Self {
        Self::StructureNumbered {
            prefix_len: naming.print_prefix_len,
            suffix_len: naming.print_suffix_len,
        }
    }

    pub fn image_id(&self, file_name: &str) -> Result<String> {
        match *self {
            Self::StripSuffix { suffix_len } => slice_chars(file_name, 0, suffix_len),
            Self::StructureNumbered {
                prefix_len,
                suffix_len,
            } => {
                let number = structure_number(file_name)?;
                slice_chars(file_name, prefix_len, suffix_len + digit_buffer(number))
            }
        }
    }
}

/// Trailing structure number: the last `_`-separated token without its extension.
pub fn structure_number(file_name: &str) -> Result<u64> {
    let token = file_name.rsplit('_').next().unwrap_or(file_name);
    let digits = match token.rfind('.') {
        Some(pos) => &token[..pos],
        None => token,
    };
    match digits.parse::<u64>() {
        Ok(n) => Ok(n),
        Err(_) => bail!(
            "print file '{}' does not end in a structure number (found '{}')",
            file_name,
            digits
        ),
    }
}

fn digit_buffer(number: u64) -> usize {
    if number <= 9 {
        0
    } else if number <= 99 {
        1
    } else {
        2
    }
}

fn slice_chars(name: &str, prefix_len: usize, suffix_len: usize) -> Result<String> {
    let n = name.chars().count();
    if prefix_len + suffix_len > n {
        bail!(
            "file name '{}' is shorter than its naming convention ({} + {} characters)",
            name,
            prefix_len,
            suffix_len
        );
    }
    Ok(name
        .chars()
        .skip(prefix_len)
        .take(n - prefix_len - suffix_len)
        .collect())
}

/// Fold consecutive entries with the same image name, summing their counts.
pub fn group_consecutive<I>(entries: I) -> Vec<ImageStructureCount>
where
    I: IntoIterator<Item = (String, usize)>,
{
    let mut out: Vec<ImageStructureCount> = Vec::new();
    for (image, count) in entries {
        match out.last_mut() {
            Some(last) if last.image == image => last.count += count,
            _ => out.push(ImageStructureCount { image, count }),
        }
    }
    out
}

pub fn count_prints(files: &[String], strategy: ImageIdStrategy) -> Result<Vec<ImageStructureCount>> {
    let ids = files
        .iter()
        .map(|f| strategy.image_id(f).map(|id| (id, 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(group_consecutive(ids))
}

pub fn total(counts: &[ImageStructureCount]) -> usize {
    counts.iter().map(|c| c.count).sum()
}
