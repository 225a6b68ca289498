use crate::counts::ImageStructureCount;
use crate::ctx::{Ctx, StructureKind};
use crate::reconcile::Mismatch;

fn format_sequence(seq: &[ImageStructureCount]) -> String {
    let items: Vec<String> = seq.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub fn format_mismatch(kind: StructureKind, mismatch: &Mismatch) -> String {
    let mut out = String::new();
    out.push_str(&format!("ERROR: Mismatch {} Data\n", kind.label()));
    out.push_str(&format!("Number of {} per Image\n", kind.label()));
    out.push_str(&format!("First difference: {}\n", mismatch.first));
    out.push_str("Prints:\n");
    out.push_str(&format_sequence(&mismatch.prints));
    out.push('\n');
    out.push_str("Pbody:\n");
    out.push_str(&format_sequence(&mismatch.pbody));
    out.push('\n');
    out.push_str("FISH-QUANT:\n");
    out.push_str(&format_sequence(&mismatch.reports));
    out.push('\n');
    out
}

pub fn format_validate(ctx: &Ctx) -> String {
    let mut out = String::new();
    for kind in StructureKind::ALL {
        let state = ctx.kind(kind);
        let label = kind.label().to_lowercase();
        if let Some(m) = &state.mismatch {
            out.push_str(&format!("{}: mismatch\n", label));
            out.push_str(&format_mismatch(kind, m));
        } else if let Some(a) = &state.alignment {
            out.push_str(&format!(
                "{}: ok ({} images, {} structures)\n",
                label,
                a.images.len(),
                a.n_structures()
            ));
        }
    }
    out
}
