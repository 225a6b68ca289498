use std::fmt;

use crate::counts::{ImageStructureCount, total};

/// The shared per-image layout once all three streams agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub images: Vec<ImageStructureCount>,
}

impl Alignment {
    pub fn n_structures(&self) -> usize {
        total(&self.images)
    }

    pub fn structure_images(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .flat_map(|img| std::iter::repeat_n(img.image.as_str(), img.count))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Divergence {
    LengthMismatch {
        prints: usize,
        pbody: usize,
        reports: usize,
    },
    ImageMismatch {
        position: usize,
        prints: String,
        pbody: String,
        reports: String,
    },
    CountMismatch {
        image: String,
        prints: usize,
        pbody: usize,
        reports: usize,
    },
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                prints,
                pbody,
                reports,
            } => write!(
                f,
                "image counts differ: prints={} pbody={} reports={}",
                prints, pbody, reports
            ),
            Self::ImageMismatch {
                position,
                prints,
                pbody,
                reports,
            } => write!(
                f,
                "image #{} differs: prints='{}' pbody='{}' reports='{}'",
                position + 1,
                prints,
                pbody,
                reports
            ),
            Self::CountMismatch {
                image,
                prints,
                pbody,
                reports,
            } => write!(
                f,
                "structure count for '{}' differs: prints={} pbody={} reports={}",
                image, prints, pbody, reports
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub prints: Vec<ImageStructureCount>,
    pub pbody: Vec<ImageStructureCount>,
    pub reports: Vec<ImageStructureCount>,
    pub first: Divergence,
}

pub fn reconcile(
    prints: &[ImageStructureCount],
    pbody: &[ImageStructureCount],
    reports: &[ImageStructureCount],
) -> Result<Alignment, Box<Mismatch>> {
    match first_divergence(prints, pbody, reports) {
        None => Ok(Alignment {
            images: prints.to_vec(),
        }),
        Some(first) => Err(Box::new(Mismatch {
            prints: prints.to_vec(),
            pbody: pbody.to_vec(),
            reports: reports.to_vec(),
            first,
        })),
    }
}

fn first_divergence(
    prints: &[ImageStructureCount],
    pbody: &[ImageStructureCount],
    reports: &[ImageStructureCount],
) -> Option<Divergence> {
    let shared = prints.len().min(pbody.len()).min(reports.len());
    for i in 0..shared {
        let (a, b, c) = (&prints[i], &pbody[i], &reports[i]);
        if a.image != b.image || a.image != c.image {
            return Some(Divergence::ImageMismatch {
                position: i,
                prints: a.image.clone(),
                pbody: b.image.clone(),
                reports: c.image.clone(),
            });
        }
        if a.count != b.count || a.count != c.count {
            return Some(Divergence::CountMismatch {
                image: a.image.clone(),
                prints: a.count,
                pbody: b.count,
                reports: c.count,
            });
        }
    }
    if prints.len() != pbody.len() || prints.len() != reports.len() {
        return Some(Divergence::LengthMismatch {
            prints: prints.len(),
            pbody: pbody.len(),
            reports: reports.len(),
        });
    }
    None
}
